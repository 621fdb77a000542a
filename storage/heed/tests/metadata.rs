use {
    alloy::signers::local::PrivateKeySigner,
    nonced_shared::primitives::{Address, B256},
    nonced_signer::{
        KeyValueStore, LocalWallet, Message, MessageSigner, NonceStore, codec::encode_unsigned,
        test_doubles::FixedResolver,
    },
    nonced_storage_heed::HeedMetadataStore,
};

mod common;

fn wallet() -> (LocalWallet, Address) {
    let mut wallet = LocalWallet::new();
    let key = PrivateKeySigner::from_bytes(&B256::repeat_byte(0x11)).unwrap();
    let address = wallet.insert(key);
    (wallet, address)
}

fn message(from: Address) -> Message {
    Message {
        from,
        gas_limit: 21_000,
        ..Default::default()
    }
}

#[test]
fn test_missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = HeedMetadataStore::new(common::create_env(dir.path())).unwrap();

    let actual = store.get(b"missing").unwrap();

    assert_eq!(actual, None);
}

#[test]
fn test_put_value_is_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = HeedMetadataStore::new(common::create_env(dir.path())).unwrap();

    store.put(b"key", b"first").unwrap();
    store.put(b"key", b"second").unwrap();

    assert_eq!(store.get(b"key").unwrap(), Some(b"second".to_vec()));
}

#[test]
fn test_nonces_survive_reopening_environment() {
    let dir = tempfile::tempdir().unwrap();
    let (wallet, address) = wallet();
    let resolver = FixedResolver::new([(address, 5)]);

    {
        let store = HeedMetadataStore::new(common::create_env(dir.path())).unwrap();
        let signer = MessageSigner::new(&wallet, &resolver, store);

        assert_eq!(signer.sign_message(message(address)).unwrap().nonce(), 5);
        assert_eq!(signer.sign_message(message(address)).unwrap().nonce(), 6);
    }

    let store = HeedMetadataStore::new(common::create_env(dir.path())).unwrap();
    let signer = MessageSigner::new(&wallet, &resolver, store);

    assert_eq!(signer.sign_message(message(address)).unwrap().nonce(), 7);
    assert_eq!(signer.stored_nonce(&address).unwrap(), Some(7));
    assert_eq!(resolver.calls(), 1);
}

#[test]
fn test_nonce_entry_uses_compact_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let store = HeedMetadataStore::new(common::create_env(dir.path())).unwrap();
    let address = Address::repeat_byte(0x42);

    NonceStore::new(&store).put(&address, 1_000_000).unwrap();

    let key = [
        b"/message-signer".as_slice(),
        &NonceStore::<HeedMetadataStore>::key(&address),
    ]
    .concat();
    let actual = store.get(&key).unwrap();

    assert_eq!(actual, Some(encode_unsigned(1_000_000).unwrap()));
}
