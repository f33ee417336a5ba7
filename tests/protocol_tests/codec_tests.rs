//! Codec Tests
//!
//! Tests for command and response encoding/decoding.

use std::io::Cursor;

use duokv::protocol::{
    decode_command, decode_response, encode_command, encode_response, read_command,
    read_response, write_command, write_response, Command, CommandType, Reply, Response, Status,
    HEADER_SIZE, MAX_PAYLOAD_SIZE,
};
use duokv::value::{Input, Kind, KindOf, Value};
use duokv::DuoError;

// =============================================================================
// Command Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_encode_decode_list_command() {
    let cmd = Command::LPush {
        key: "mylist".to_string(),
        elements: vec![Input::Integer(1), Input::from("two"), Input::Float(3.0)],
    };
    let encoded = encode_command(&cmd).unwrap();

    assert_eq!(encoded[0], CommandType::LPush as u8);
    assert_eq!(decode_command(&encoded).unwrap(), cmd);
}

#[test]
fn test_encode_decode_pop_with_negative_indices() {
    let cmd = Command::RPop {
        key: "k".to_string(),
        indices: vec![1, -2],
    };
    let decoded = decode_command(&encode_command(&cmd).unwrap()).unwrap();

    match decoded {
        Command::RPop { key, indices } => {
            assert_eq!(key, "k");
            assert_eq!(indices, vec![1, -2]);
        }
        other => panic!("Expected RPOP command, got {:?}", other),
    }
}

#[test]
fn test_command_header_length_matches_payload() {
    let cmd = Command::Set {
        key: "k".to_string(),
        value: Input::from("v"),
    };
    let encoded = encode_command(&cmd).unwrap();
    let len = u32::from_be_bytes([encoded[1], encoded[2], encoded[3], encoded[4]]) as usize;

    assert_eq!(encoded.len(), HEADER_SIZE + len);
}

#[test]
fn test_every_command_type_byte_round_trips() {
    let commands = vec![
        Command::Set { key: "k".into(), value: Input::Integer(1) },
        Command::Get { key: "k".into() },
        Command::Kind { key: "k".into() },
        Command::LPush { key: "k".into(), elements: vec![Input::Integer(1)] },
        Command::RPush { key: "k".into(), elements: vec![Input::Integer(1)] },
        Command::RAddToSet { key: "k".into(), elements: vec![Input::Integer(1)] },
        Command::LPop { key: "k".into(), indices: vec![] },
        Command::RPop { key: "k".into(), indices: vec![2] },
        Command::LSet { key: "k".into(), index: -1, element: Input::from("x") },
        Command::LGet { key: "k".into(), index: 0 },
        Command::Save { path: None },
        Command::Ping,
        Command::Shutdown,
    ];

    for cmd in commands {
        let encoded = encode_command(&cmd).unwrap();
        let ty = CommandType::from_byte(encoded[0]).unwrap();
        assert_eq!(ty, cmd.command_type());
        assert_eq!(decode_command(&encoded).unwrap(), cmd);
    }
}

#[test]
fn test_decode_command_incomplete_header() {
    let err = decode_command(&[0x01, 0x00]).unwrap_err();
    assert!(matches!(err, DuoError::Protocol(_)));
}

#[test]
fn test_decode_command_incomplete_payload() {
    let mut encoded = encode_command(&Command::Get { key: "abc".into() }).unwrap();
    encoded.pop();

    assert!(matches!(decode_command(&encoded), Err(DuoError::Protocol(_))));
}

#[test]
fn test_decode_command_unknown_type() {
    let mut encoded = encode_command(&Command::Ping).unwrap();
    encoded[0] = 0xFF;

    assert!(matches!(decode_command(&encoded), Err(DuoError::Protocol(_))));
}

#[test]
fn test_decode_command_header_payload_mismatch() {
    let mut encoded = encode_command(&Command::Get { key: "k".into() }).unwrap();
    encoded[0] = CommandType::Kind as u8;

    assert!(matches!(decode_command(&encoded), Err(DuoError::Protocol(_))));
}

#[test]
fn test_decode_command_payload_too_large() {
    let mut bytes = vec![CommandType::Ping as u8];
    bytes.extend_from_slice(&(MAX_PAYLOAD_SIZE + 1).to_be_bytes());

    assert!(matches!(decode_command(&bytes), Err(DuoError::Protocol(_))));
}

#[test]
fn test_composite_input_round_trips_flat() {
    let cmd = Command::Set {
        key: "k".to_string(),
        value: Input::from(serde_json::json!([[1, [2]], {"a": [3]}])),
    };
    let decoded = decode_command(&encode_command(&cmd).unwrap()).unwrap();

    assert_eq!(
        decoded,
        Command::Set {
            key: "k".to_string(),
            value: Input::List(2),
        }
    );
}

#[test]
fn test_decode_command_deeply_nested_payload_rejected() {
    // Set { key: "k", value: List } followed by a million more (List, 1)
    // headers, the layout a recursive list value would have on the wire
    let mut payload = Vec::new();
    payload.extend_from_slice(&0u32.to_le_bytes());
    payload.extend_from_slice(&1u64.to_le_bytes());
    payload.push(b'k');
    for _ in 0..1_000_000 {
        payload.extend_from_slice(&5u32.to_le_bytes());
        payload.extend_from_slice(&1u64.to_le_bytes());
    }
    assert!(payload.len() <= MAX_PAYLOAD_SIZE as usize);

    let mut frame = vec![CommandType::Set as u8];
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(&payload);

    assert!(matches!(decode_command(&frame), Err(DuoError::Protocol(_))));
}

#[test]
fn test_decode_command_trailing_bytes_rejected() {
    let mut encoded = encode_command(&Command::Get { key: "k".into() }).unwrap();
    encoded.push(0);
    let len = (encoded.len() - HEADER_SIZE) as u32;
    encoded[1..HEADER_SIZE].copy_from_slice(&len.to_be_bytes());

    assert!(matches!(decode_command(&encoded), Err(DuoError::Protocol(_))));
}

// =============================================================================
// Response Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_response_ok_reply_round_trip() {
    let replies = vec![
        Reply::Done,
        Reply::Ok,
        Reply::Length(5),
        Reply::Value(Value::from("v")),
        Reply::Values(vec![Value::Integer(2), Value::Integer(3)]),
        Reply::Kind(KindOf::Kind(Kind::Integer)),
        Reply::Kind(KindOf::No),
        Reply::Pong,
    ];

    for reply in replies {
        let response = Response::ok(&reply).unwrap();
        let decoded = decode_response(&encode_response(&response).unwrap()).unwrap();
        assert_eq!(decoded.status, Status::Ok);
        assert_eq!(decoded.reply().unwrap(), reply);
    }
}

#[test]
fn test_response_failure_message() {
    let response = Response::failure(Status::BadRequest, "Index out of range");
    let decoded = decode_response(&encode_response(&response).unwrap()).unwrap();

    assert_eq!(decoded.status, Status::BadRequest);
    assert_eq!(decoded.message().unwrap(), "Index out of range");
    assert!(decoded.reply().is_err());
}

#[test]
fn test_decode_response_unknown_status() {
    let bytes = [0x7F, 0, 0, 0, 0];
    assert!(matches!(decode_response(&bytes), Err(DuoError::Protocol(_))));
}

// =============================================================================
// Status Mapping Tests
// =============================================================================

#[test]
fn test_status_mapping() {
    let not_found = DuoError::NotFound("key k".to_string());

    assert_eq!(Status::for_failure(CommandType::Get, &not_found), Status::NotFound);
    assert_eq!(
        Status::for_failure(CommandType::LSet, &DuoError::IndexOutOfRange),
        Status::BadRequest
    );
    assert_eq!(
        Status::for_failure(CommandType::LSet, &not_found),
        Status::BadRequest
    );
    assert_eq!(
        Status::for_failure(CommandType::LPop, &not_found),
        Status::Error
    );
    assert_eq!(
        Status::for_failure(CommandType::LPush, &DuoError::EmptyArgs),
        Status::Error
    );
    assert_eq!(
        Status::for_failure(CommandType::Set, &DuoError::undefined_type()),
        Status::Error
    );
}

#[test]
fn test_response_from_result() {
    let ok = Response::from_result(CommandType::Ping, Ok(Reply::Pong));
    assert_eq!(ok.status, Status::Ok);

    let err = Response::from_result(CommandType::LGet, Err(DuoError::IndexOutOfRange));
    assert_eq!(err.status, Status::Error);
    assert_eq!(err.message().unwrap(), "Index out of range");
}

// =============================================================================
// Stream I/O Tests
// =============================================================================

#[test]
fn test_stream_command_round_trip() {
    let mut buffer = Vec::new();
    write_command(&mut buffer, &Command::Get { key: "a".into() }).unwrap();
    write_command(&mut buffer, &Command::Ping).unwrap();

    let mut cursor = Cursor::new(buffer);
    assert_eq!(
        read_command(&mut cursor).unwrap(),
        Command::Get { key: "a".into() }
    );
    assert_eq!(read_command(&mut cursor).unwrap(), Command::Ping);

    // Stream exhausted
    match read_command(&mut cursor) {
        Err(DuoError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("Expected EOF, got {:?}", other),
    }
}

#[test]
fn test_stream_response_round_trip() {
    let mut buffer = Vec::new();
    write_response(&mut buffer, &Response::ok(&Reply::Length(3)).unwrap()).unwrap();
    write_response(&mut buffer, &Response::error("boom")).unwrap();

    let mut cursor = Cursor::new(buffer);
    assert_eq!(
        read_response(&mut cursor).unwrap().reply().unwrap(),
        Reply::Length(3)
    );
    let failed = read_response(&mut cursor).unwrap();
    assert_eq!(failed.status, Status::Error);
    assert_eq!(failed.message().unwrap(), "boom");
}
