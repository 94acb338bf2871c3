//! Domain model tests for tickets, identifiers, configuration, and events.

use crate::access::domain::{Address, Role};
use crate::kanban::domain::{
    ColumnId, EventEnvelope, KanbanEvent, ManagerConfig, StatusId, Ticket, TicketId,
};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

fn sample_ticket() -> Ticket {
    Ticket::new(
        TicketId::new(0),
        "Write release notes".to_owned(),
        "ipfs://notes".to_owned(),
        ColumnId::new(0),
        StatusId::new(1),
        vec![7, 8],
    )
}

#[rstest]
#[case(0, Some(0))]
#[case(41, Some(41))]
fn ids_map_to_table_positions(#[case] value: u64, #[case] expected: Option<usize>) {
    assert_eq!(ColumnId::new(value).position(), expected);
    assert_eq!(TicketId::from(value).value(), value);
}

#[rstest]
fn status_id_defaults_to_zero() {
    assert_eq!(StatusId::default().value(), 0);
}

#[rstest]
fn default_config_limits() {
    let config = ManagerConfig::default();
    assert_eq!(config.max_columns, 64);
    assert_eq!(config.max_statuses, 64);
    assert_eq!(config.token_symbol, "KBN");
}

#[rstest]
fn lenient_config_lifts_limits() {
    let config = ManagerConfig::lenient().with_token_symbol("ROAD");
    assert_eq!(config.max_columns, usize::MAX);
    assert_eq!(config.max_name_length, usize::MAX);
    assert_eq!(config.token_symbol, "ROAD");
}

#[rstest]
fn ticket_created_serializes_fields_in_record_order() {
    let event = KanbanEvent::TicketCreated {
        ticket: sample_ticket(),
    };
    let encoded = serde_json::to_string(&event).expect("serialize event");
    assert_eq!(
        encoded,
        concat!(
            r#"{"type":"ticket_created","ticket":{"id":0,"name":"Write release notes","#,
            r#""uri":"ipfs://notes","column_id":0,"status_id":1,"data":[7,8]}}"#
        )
    );
}

#[rstest]
fn role_events_carry_sender() {
    let admin = Address::derive(b"admin");
    let member = Address::derive(b"member");
    let event = KanbanEvent::RoleGranted {
        role: Role::Member,
        account: member,
        sender: admin,
    };
    let value = serde_json::to_value(&event).expect("serialize event");
    assert_eq!(
        value,
        json!({
            "type": "role_granted",
            "role": "member",
            "account": member.to_string(),
            "sender": admin.to_string(),
        })
    );
    assert_eq!(event.name(), "RoleGranted");
}

#[rstest]
fn envelope_round_trips_through_json() {
    let kanban = Address::derive(b"manager");
    let envelope = EventEnvelope::new(
        kanban,
        KanbanEvent::TicketCreated {
            ticket: sample_ticket(),
        },
        &DefaultClock,
    );
    let encoded = serde_json::to_string(&envelope).expect("serialize envelope");
    let decoded: EventEnvelope = serde_json::from_str(&encoded).expect("deserialize envelope");
    assert_eq!(decoded, envelope);
}
