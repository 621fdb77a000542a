use {
    hex_literal::hex,
    nonced_shared::primitives::Address,
    nonced_signer::{KeyValueStore, NonceStore},
    nonced_storage_rocksdb::RocksDbMetadataStore,
};

mod common;

#[test]
fn test_nonce_namespace_does_not_collide_with_other_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let db = common::create_db(dir.path());
    let store = RocksDbMetadataStore::new(db.clone()).unwrap();
    let nonces = NonceStore::new(&store);

    let address = Address::new(hex!("50596cee391a497683672d9396379f56cd8e9647"));

    nonces.put(&address, 9).unwrap();

    // Another component writing metadata under the bare nonce key must not touch the nonce,
    // which lives under the private namespace.
    let bare_key = NonceStore::<RocksDbMetadataStore>::key(&address);
    let random_value = hex!("feef");

    store.put(&bare_key, random_value.as_slice()).unwrap();

    assert_eq!(nonces.get(&address).unwrap(), Some(9));
    assert_eq!(
        store.get(&bare_key).unwrap().expect("Key should exist in database"),
        random_value
    );

    // Nor must writes to the default column family under the namespaced key.
    let namespaced_key = [b"/message-signer".as_slice(), &bare_key].concat();
    db.put(&namespaced_key, random_value).unwrap();

    assert_eq!(nonces.get(&address).unwrap(), Some(9));
}
