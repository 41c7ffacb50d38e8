use super::*;

#[test]
fn decode_reads_valid_json() {
    assert_eq!(decode::<Vec<u32>>("[1,2,3]"), Some(vec![1, 2, 3]));
}

#[test]
fn decode_discards_corrupt_entries() {
    assert_eq!(decode::<Vec<u32>>("{not json"), None);
    assert_eq!(decode::<Vec<u32>>("\"text\""), None);
}

#[test]
fn encode_produces_json() {
    assert_eq!(encode(&vec![1, 2]).as_deref(), Some("[1,2]"));
}

#[test]
fn storage_is_inert_off_browser() {
    save_json("paperbook_test", &1_u32);
    assert_eq!(load_json::<u32>("paperbook_test"), None);
    remove_key("paperbook_test");
}
