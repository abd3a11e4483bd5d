//! Wire-shape tests for gateway payloads
//!
//! Frames are taken from the Discord Gateway documentation and decoded into
//! the typed unions, then encoded back.

use gateway_model::{
    ActivityType, ActivityUpdateData, CloseCode, Dispatch, DispatchEventName, GatewayCommand,
    GatewayEvent, Heartbeat, HeartbeatAck, Hello, Identify, IdentifyProperties, Intents,
    InvalidSession, ModelError, OpCode, PresenceStatus, PresenceUpdateData, RawPayload, Reconnect,
    RequestGuildMembers, RequestSoundboardSounds, Resume, Snowflake, VoiceStateUpdate,
};
use serde_json::{json, Value};

fn sample_identify() -> Identify {
    Identify::new("my_token", Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT)
        .with_properties(IdentifyProperties::new("linux", "disco", "disco"))
        .with_shard(0, 1)
        .with_presence(
            PresenceUpdateData::new(PresenceStatus::Online)
                .with_activity(ActivityUpdateData::new(ActivityType::Playing, "Rocket League")),
        )
}

fn decode_event(value: Value) -> GatewayEvent {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_spec_constant_values() {
    assert_eq!(OpCode::Dispatch.as_u8(), 0);
    assert_eq!(OpCode::Hello.as_u8(), 10);
    assert_eq!(OpCode::HeartbeatAck.as_u8(), 11);
    assert_eq!(OpCode::RequestSoundboardSounds.as_u8(), 31);
    assert_eq!(CloseCode::UnknownError.as_u16(), 4000);
    assert_eq!(CloseCode::from_u16(4006), None);
    assert_eq!(DispatchEventName::MessageCreate.as_str(), "MESSAGE_CREATE");
}

#[test]
#[allow(deprecated)]
fn test_intent_aliases_resolve_identically() {
    assert_eq!(Intents::GUILD_BANS.bits(), Intents::GUILD_MODERATION.bits());
    assert_eq!(Intents::GUILD_EMOJIS_AND_STICKERS.bits(), Intents::GUILD_EXPRESSIONS.bits());

    let identify = Identify::new("t", Intents::GUILD_BANS);
    let value = serde_json::to_value(GatewayCommand::from(identify)).unwrap();
    assert_eq!(value["d"]["intents"], Intents::GUILD_MODERATION.bits());
}

#[test]
fn test_identify_large_threshold_is_omitted_when_unset() {
    let unset = serde_json::to_value(GatewayCommand::from(sample_identify())).unwrap();
    assert!(unset["d"].get("large_threshold").is_none());

    let set = serde_json::to_value(GatewayCommand::from(sample_identify().with_large_threshold(50))).unwrap();
    assert_eq!(set["d"]["large_threshold"], json!(50));
}

#[test]
fn test_first_heartbeat_sends_null() {
    let value = serde_json::to_value(GatewayCommand::Heartbeat(Heartbeat(None))).unwrap();
    assert_eq!(value, json!({"op": 1, "d": null}));
    assert_ne!(value["d"], json!(0));

    let value = serde_json::to_value(GatewayCommand::Heartbeat(Heartbeat(Some(251)))).unwrap();
    assert_eq!(value, json!({"op": 1, "d": 251}));
}

#[test]
fn test_identify_frame_shape() {
    let value = serde_json::to_value(GatewayCommand::from(sample_identify())).unwrap();

    assert_eq!(
        value,
        json!({
            "op": 2,
            "d": {
                "token": "my_token",
                "properties": {"os": "linux", "browser": "disco", "device": "disco"},
                "shard": [0, 1],
                "presence": {
                    "since": null,
                    "activities": [{"name": "Rocket League", "type": 0}],
                    "status": "online",
                    "afk": false
                },
                "intents": 33281
            }
        })
    );
}

#[test]
fn test_decode_hello() {
    let event = decode_event(json!({"op": 10, "d": {"heartbeat_interval": 45000}}));
    assert_eq!(event, GatewayEvent::Hello(Hello::new(45_000)));
    assert_eq!(event.opcode(), OpCode::Hello);
    assert_eq!(event.sequence(), None);
}

#[test]
fn test_decode_receive_only_frames() {
    assert_eq!(
        decode_event(json!({"op": 11, "d": null})),
        GatewayEvent::HeartbeatAck(HeartbeatAck(None))
    );
    assert_eq!(
        decode_event(json!({"op": 11})),
        GatewayEvent::HeartbeatAck(HeartbeatAck(None))
    );
    assert_eq!(
        decode_event(json!({"op": 7, "d": null})),
        GatewayEvent::Reconnect(Reconnect)
    );
    assert_eq!(
        decode_event(json!({"op": 9, "d": true})),
        GatewayEvent::InvalidSession(InvalidSession(true))
    );
    assert_eq!(
        decode_event(json!({"op": 1, "d": null})),
        GatewayEvent::Heartbeat(Heartbeat(None))
    );
}

#[test]
fn test_decode_dispatch() {
    let event = decode_event(json!({
        "op": 0,
        "d": {"id": "1", "content": "hi"},
        "s": 42,
        "t": "MESSAGE_CREATE"
    }));

    let GatewayEvent::Dispatch(dispatch) = &event else {
        panic!("expected dispatch, got {event:?}");
    };
    assert_eq!(dispatch.event(), Some(DispatchEventName::MessageCreate));
    assert_eq!(dispatch.sequence, 42);
    assert_eq!(dispatch.data["content"], "hi");
    assert_eq!(event.sequence(), Some(42));
}

#[test]
fn test_unknown_dispatch_event_is_kept() {
    let event = decode_event(json!({"op": 0, "d": {}, "s": 3, "t": "BRAND_NEW_EVENT"}));
    let GatewayEvent::Dispatch(dispatch) = event else {
        panic!("expected dispatch");
    };
    assert_eq!(dispatch.event_name, "BRAND_NEW_EVENT");
    assert_eq!(dispatch.event(), None);
}

#[test]
fn test_unknown_opcode_is_classified_not_crashed() {
    let raw: RawPayload = serde_json::from_value(json!({"op": 5, "d": null})).unwrap();
    assert!(matches!(GatewayEvent::try_from(raw), Err(ModelError::UnknownOpcode(5))));

    let result = serde_json::from_value::<GatewayEvent>(json!({"op": 12, "d": null}));
    assert!(result.is_err());
}

#[test]
fn test_direction_is_enforced_by_type() {
    let identify_frame = serde_json::to_value(GatewayCommand::from(sample_identify())).unwrap();
    let raw: RawPayload = serde_json::from_value(identify_frame).unwrap();
    assert!(matches!(
        GatewayEvent::try_from(raw),
        Err(ModelError::UnexpectedOpcode { op: OpCode::Identify, .. })
    ));

    let raw: RawPayload = serde_json::from_value(json!({"op": 10, "d": {"heartbeat_interval": 1}})).unwrap();
    assert!(matches!(
        GatewayCommand::try_from(raw),
        Err(ModelError::UnexpectedOpcode { op: OpCode::Hello, .. })
    ));
}

#[test]
fn test_commands_round_trip() {
    let commands = vec![
        GatewayCommand::from(Heartbeat(None)),
        GatewayCommand::from(Heartbeat(Some(7))),
        GatewayCommand::from(sample_identify().with_compress(true).with_large_threshold(250)),
        GatewayCommand::from(PresenceUpdateData::new(PresenceStatus::Invisible)),
        GatewayCommand::from(VoiceStateUpdate::leave(Snowflake::new(41_771_983_423_143_937))),
        GatewayCommand::from(Resume {
            token: "my_token".to_string(),
            session_id: "session".to_string(),
            seq: 1337,
        }),
        GatewayCommand::from(
            RequestGuildMembers::by_query(Snowflake::new(41_771_983_444_115_456), "", 0).with_nonce("n"),
        ),
        GatewayCommand::from(RequestSoundboardSounds {
            guild_ids: vec![Snowflake::new(613_425_648_685_547_541)],
        }),
    ];

    for command in commands {
        let json = serde_json::to_string(&command).unwrap();
        let parsed: GatewayCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, command, "{json}");
        assert_eq!(command.to_raw().unwrap().op, command.opcode().as_u8());
    }
}

#[test]
fn test_events_round_trip() {
    let events = vec![
        GatewayEvent::from(Dispatch::new(DispatchEventName::Ready, 1, json!({"v": 10}))),
        GatewayEvent::from(Heartbeat(Some(3))),
        GatewayEvent::from(Reconnect),
        GatewayEvent::from(InvalidSession(false)),
        GatewayEvent::from(Hello::new(41_250)),
        GatewayEvent::from(HeartbeatAck(None)),
    ];

    for event in events {
        let json = serde_json::to_string(&event).unwrap();
        let parsed: GatewayEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event, "{json}");

        let raw = event.to_raw().unwrap();
        assert_eq!(GatewayEvent::try_from(raw).unwrap(), event);
    }
}

#[test]
fn test_dispatch_frame_carries_name_and_sequence() {
    let event = GatewayEvent::from(Dispatch::new(DispatchEventName::GuildCreate, 2, json!({})));
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value, json!({"op": 0, "d": {}, "s": 2, "t": "GUILD_CREATE"}));
}
