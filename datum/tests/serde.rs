#![cfg(feature = "serde")]

use datum::{Datum, OneShot, These};

#[test]
fn datum_uses_external_tags() {
    assert_eq!(serde_json::to_string(&Datum::<i32>::Empty).unwrap(), "\"Empty\"");
    assert_eq!(serde_json::to_string(&Datum::Stale(3)).unwrap(), "{\"Stale\":3}");

    let back: Datum<Vec<u8>> = serde_json::from_str("{\"Fresh\":[1,2]}").unwrap();
    assert_eq!(back, Datum::Fresh(vec![1, 2]));
}

#[test]
fn result_payloads_nest_inside_the_tag() {
    let d: Datum<Result<i32, String>> = Datum::Stale(Err("boom".to_string()));
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "{\"Stale\":{\"Err\":\"boom\"}}");
    let back: Datum<Result<i32, String>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
}

#[test]
fn one_shot_and_these_round_trip() {
    let o = OneShot::Done("x".to_string());
    let json = serde_json::to_string(&o).unwrap();
    assert_eq!(json, "{\"Done\":\"x\"}");
    assert_eq!(serde_json::from_str::<OneShot<String>>(&json).unwrap(), o);

    let t: These<String, i32> = These::Both("w".to_string(), 1);
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "{\"Both\":[\"w\",1]}");
    assert_eq!(serde_json::from_str::<These<String, i32>>(&json).unwrap(), t);
}

#[test]
fn unknown_tag_is_rejected() {
    assert!(serde_json::from_str::<Datum<i32>>("\"Pending\"").is_err());
}
