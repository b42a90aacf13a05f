use super::*;

fn start_json() -> &'static str {
    r#"{
        "type": "start",
        "turn": "white",
        "moves_remaining": 2,
        "your_color": "white",
        "shapes": [[[0, 0], [1, 0]]],
        "board": {
            "white_player": [2, 2],
            "black_player": [5, 5],
            "white_block": [],
            "black_block": []
        }
    }"#
}

// =============================================================
// Outbound
// =============================================================

#[test]
fn join_encodes_name() {
    let text = encode_message(&ClientMessage::Join { name: "bob".to_owned() }).expect("encode");
    let value: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value, serde_json::json!({"type": "join", "name": "bob"}));
}

#[test]
fn move_and_shoot_encode_compass_letters() {
    let cases = [
        (Direction::North, "N"),
        (Direction::South, "S"),
        (Direction::East, "E"),
        (Direction::West, "W"),
    ];
    for (direction, letter) in cases {
        let text = encode_message(&ClientMessage::Move { direction }).expect("encode");
        let value: Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value, serde_json::json!({"type": "move", "direction": letter}));

        let text = encode_message(&ClientMessage::Shoot { direction }).expect("encode");
        let value: Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value, serde_json::json!({"type": "shoot", "direction": letter}));
    }
}

#[test]
fn ping_encodes_without_fields() {
    let text = encode_message(&ClientMessage::Ping).expect("encode");
    let value: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value, serde_json::json!({"type": "ping"}));
}

#[test]
fn place_encodes_origin_as_pair() {
    let text = encode_message(&ClientMessage::Place { shape_index: 2, origin: [3, -1] }).expect("encode");
    let value: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value, serde_json::json!({"type": "place", "shape_index": 2, "origin": [3, -1]}));
}

// =============================================================
// Inbound
// =============================================================

#[test]
fn decode_joined() {
    let msg = decode_message(r#"{"type":"joined","board_width":8,"moves_per_turn":2}"#).expect("decode");
    assert_eq!(
        msg,
        ServerMessage::Joined(JoinedMessage { board_width: 8, moves_per_turn: 2, shapes: None })
    );
    assert_eq!(msg.kind(), "joined");
}

#[test]
fn decode_joined_with_shapes() {
    let msg = decode_message(r#"{"type":"joined","board_width":8,"moves_per_turn":2,"shapes":[[[0,0],[0,1]]]}"#)
        .expect("decode");
    let ServerMessage::Joined(joined) = msg else {
        panic!("expected joined");
    };
    assert_eq!(joined.shapes, Some(vec![vec![[0, 0], [0, 1]]]));
}

#[test]
fn decode_start_with_color_and_shapes() {
    let msg = decode_message(start_json()).expect("decode");
    let ServerMessage::Start(state) = msg else {
        panic!("expected start");
    };
    assert_eq!(state.turn, Color::White);
    assert_eq!(state.moves_remaining, 2);
    assert_eq!(state.your_color, Some(Color::White));
    assert_eq!(state.shapes, Some(vec![vec![[0, 0], [1, 0]]]));
    assert_eq!(state.board.white_player, Some([2, 2]));
    assert_eq!(state.board.black_player, Some([5, 5]));
    assert!(state.board.white_block.is_empty());
}

#[test]
fn decode_update_without_first_delivery_fields() {
    let msg = decode_message(
        r#"{"type":"update","turn":"black","moves_remaining":1,"turn_number":4,"ping_saw_opponent":true,
            "board":{"white_player":null,"black_player":[0,1],"white_block":[[1,1]],"black_block":[[2,2],[2,3]]}}"#,
    )
    .expect("decode");
    let ServerMessage::Update(state) = msg else {
        panic!("expected update");
    };
    assert_eq!(state.turn, Color::Black);
    assert_eq!(state.your_color, None);
    assert_eq!(state.shapes, None);
    assert_eq!(state.turn_number, Some(4));
    assert_eq!(state.ping_saw_opponent, Some(true));
    assert_eq!(state.board.white_player, None);
    assert_eq!(state.board.black_block.len(), 2);
}

#[test]
fn decode_snapshot_tolerates_missing_keys() {
    let msg = decode_message(r#"{"type":"update","turn":"white","moves_remaining":0,"board":{}}"#).expect("decode");
    let ServerMessage::Update(state) = msg else {
        panic!("expected update");
    };
    assert_eq!(state.board, BoardSnapshot::default());
}

#[test]
fn decode_end_win_and_loss() {
    let msg = decode_message(r#"{"type":"end","result":"win","reason":"opponent disconnect"}"#).expect("decode");
    let ServerMessage::End(end) = msg else {
        panic!("expected end");
    };
    assert!(end.is_win());
    assert_eq!(end.reason, "opponent disconnect");

    let msg = decode_message(r#"{"type":"end","result":"loss","reason":"shot"}"#).expect("decode");
    let ServerMessage::End(end) = msg else {
        panic!("expected end");
    };
    assert!(!end.is_win());
}

#[test]
fn decode_rejects_unknown_type() {
    let err = decode_message(r#"{"type":"chat","text":"hi"}"#).expect_err("unknown type");
    assert!(matches!(err, CodecError::UnknownType(ref kind) if kind == "chat"));
}

#[test]
fn decode_rejects_missing_type() {
    let err = decode_message(r#"{"board_width":8}"#).expect_err("missing type");
    assert!(matches!(err, CodecError::MissingType));

    let err = decode_message(r#"{"type":7}"#).expect_err("non-string type");
    assert!(matches!(err, CodecError::MissingType));
}

#[test]
fn decode_rejects_malformed_json() {
    let err = decode_message("{not json").expect_err("malformed");
    assert!(matches!(err, CodecError::InvalidJson(_)));
}

#[test]
fn decode_rejects_known_type_with_bad_payload() {
    let err = decode_message(r#"{"type":"joined","board_width":"eight"}"#).expect_err("bad payload");
    assert!(matches!(err, CodecError::InvalidJson(_)));
}

#[test]
fn color_opponent_swaps() {
    assert_eq!(Color::White.opponent(), Color::Black);
    assert_eq!(Color::Black.opponent(), Color::White);
}
