//! End-to-end bridge behavior over real host stores.

use saveslot_bridge::{Error, FlushPolicy, ReadByte, SaveBridge, SLOT_KEY};
use saveslot_kv_store::{DiskKv, InMemoryKv, KvGet};

fn write_all(bridge: &mut SaveBridge<InMemoryKv>, bytes: &[u8]) {
    assert!(bridge.open_writer());
    for &b in bytes {
        bridge.write_byte(b).unwrap();
    }
    bridge.close().unwrap();
}

#[test]
fn round_trip_preserves_order_and_values() {
    let mut bridge = SaveBridge::new(InMemoryKv::new());
    let bytes: Vec<u8> = vec![0, 1, 72, 105, 200, 255];

    write_all(&mut bridge, &bytes);

    assert!(bridge.open_reader().unwrap());
    for &expected in &bytes {
        assert_eq!(bridge.read_byte(), ReadByte::Byte(expected));
    }
    assert_eq!(bridge.read_byte(), ReadByte::EndOfStream);
    bridge.close().unwrap();
}

#[test]
fn hi_scenario_with_zero_fallback_after_the_end() {
    let mut bridge = SaveBridge::new(InMemoryKv::new());

    write_all(&mut bridge, &[72, 105]);

    assert!(bridge.open_reader().unwrap());
    assert_eq!(bridge.read_byte().value(), 72);
    assert_eq!(bridge.read_byte().value(), 105);
    // The third read must not fail; it coerces to the 0 fallback.
    assert_eq!(bridge.read_byte().value(), 0);
    bridge.close().unwrap();
}

#[test]
fn open_reader_on_fresh_store_reports_absent_record() {
    let mut bridge = SaveBridge::new(InMemoryKv::new());

    assert!(!bridge.open_reader().unwrap());
    assert_eq!(bridge.read_byte(), ReadByte::NoSession);
    bridge.close().unwrap();
}

#[test]
fn every_written_byte_is_visible_to_a_fresh_store_view() {
    let store = InMemoryKv::new();
    let mut bridge = SaveBridge::new(store.clone());

    bridge.open_writer();
    bridge.write_byte(72).unwrap();

    // Without closing, a bridge over a second view of the same store (a
    // simulated fresh process) already sees the first byte.
    let mut other = SaveBridge::new(store.clone());
    assert!(other.open_reader().unwrap());
    assert_eq!(other.read_byte(), ReadByte::Byte(72));
    assert_eq!(other.read_byte(), ReadByte::EndOfStream);

    bridge.write_byte(105).unwrap();

    let mut other = SaveBridge::new(store);
    assert!(other.open_reader().unwrap());
    assert_eq!(other.read_byte(), ReadByte::Byte(72));
    assert_eq!(other.read_byte(), ReadByte::Byte(105));
}

#[test]
fn on_close_policy_defers_the_flush() {
    let store = InMemoryKv::new();
    let mut bridge = SaveBridge::with_policy(store.clone(), FlushPolicy::OnClose);

    bridge.open_writer();
    bridge.write_byte(72).unwrap();
    bridge.write_byte(105).unwrap();

    // Nothing durable before close.
    let mut view = store.clone();
    assert_eq!(view.get(SLOT_KEY).unwrap(), None);

    bridge.close().unwrap();

    let mut other = SaveBridge::new(store);
    assert!(other.open_reader().unwrap());
    assert_eq!(other.read_byte(), ReadByte::Byte(72));
    assert_eq!(other.read_byte(), ReadByte::Byte(105));
}

#[test]
fn on_close_policy_round_trips_through_the_same_bridge() {
    let mut bridge = SaveBridge::with_policy(InMemoryKv::new(), FlushPolicy::OnClose);

    bridge.open_writer();
    for b in [3, 1, 4, 1, 5] {
        bridge.write_byte(b).unwrap();
    }
    bridge.close().unwrap();

    assert!(bridge.open_reader().unwrap());
    for expected in [3, 1, 4, 1, 5] {
        assert_eq!(bridge.read_byte(), ReadByte::Byte(expected));
    }
    assert_eq!(bridge.read_byte(), ReadByte::EndOfStream);
}

#[test]
fn session_exclusivity_in_both_directions() {
    let mut bridge = SaveBridge::new(InMemoryKv::new());
    write_all(&mut bridge, &[1, 2, 3]);

    // Reader discarded by opening a writer.
    assert!(bridge.open_reader().unwrap());
    assert_eq!(bridge.read_byte(), ReadByte::Byte(1));
    bridge.open_writer();
    assert_eq!(bridge.read_byte(), ReadByte::NoSession);

    // Writer discarded by opening a reader.
    assert!(bridge.open_reader().unwrap());
    assert!(matches!(bridge.write_byte(9), Err(Error::NoActiveSession)));
}

#[test]
fn overwriting_a_save_replaces_it_entirely() {
    let mut bridge = SaveBridge::new(InMemoryKv::new());

    write_all(&mut bridge, &[10, 20, 30]);
    write_all(&mut bridge, &[40]);

    assert!(bridge.open_reader().unwrap());
    assert_eq!(bridge.read_byte(), ReadByte::Byte(40));
    assert_eq!(bridge.read_byte(), ReadByte::EndOfStream);
}

#[test]
fn full_byte_range_survives_a_disk_store() {
    let dir = tempfile::tempdir().unwrap();
    let bytes: Vec<u8> = (0..=255).collect();

    {
        let store = DiskKv::new(dir.path().to_path_buf()).unwrap();
        let mut bridge = SaveBridge::with_policy(store, FlushPolicy::OnClose);
        bridge.open_writer();
        for &b in &bytes {
            bridge.write_byte(b).unwrap();
        }
        bridge.close().unwrap();
    }

    // A separate store over the same directory, as after a restart.
    let store = DiskKv::new(dir.path().to_path_buf()).unwrap();
    let mut bridge = SaveBridge::new(store);
    assert!(bridge.open_reader().unwrap());
    for &expected in &bytes {
        assert_eq!(bridge.read_byte(), ReadByte::Byte(expected));
    }
    assert_eq!(bridge.read_byte(), ReadByte::EndOfStream);
    bridge.close().unwrap();
}

#[test]
fn empty_save_reads_back_as_immediately_exhausted() {
    let mut bridge = SaveBridge::new(InMemoryKv::new());

    // Open a writer and close without writing: under the per-byte policy no
    // flush ever happened, so no record exists.
    bridge.open_writer();
    bridge.close().unwrap();
    assert!(!bridge.open_reader().unwrap());

    // Under the on-close policy the empty buffer is flushed, producing an
    // empty but present record.
    let mut bridge = SaveBridge::with_policy(InMemoryKv::new(), FlushPolicy::OnClose);
    bridge.open_writer();
    bridge.close().unwrap();
    assert!(bridge.open_reader().unwrap());
    assert_eq!(bridge.read_byte(), ReadByte::EndOfStream);
}
