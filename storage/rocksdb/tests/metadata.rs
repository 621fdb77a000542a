use {
    alloy::signers::local::PrivateKeySigner,
    nonced_shared::primitives::{Address, B256},
    nonced_signer::{
        Error, KeyValueStore, LocalWallet, Message, MessageSigner, NonceError, Namespaced,
        NonceStore, test_doubles::FixedResolver,
    },
    nonced_storage_rocksdb::{RocksDb, RocksDbMetadataStore},
    std::{collections::HashSet, sync::Arc, thread},
};

mod common;

fn wallet() -> (LocalWallet, Address) {
    let mut wallet = LocalWallet::new();
    let key = PrivateKeySigner::from_bytes(&B256::repeat_byte(0x22)).unwrap();
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
fn test_database_without_metadata_column_family_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let db = RocksDb::open_default(dir.path()).unwrap();

    let actual = RocksDbMetadataStore::new(Arc::new(db));

    assert!(actual.is_err());
}

#[test]
fn test_missing_key_reads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = common::create_store(dir.path());

    assert_eq!(store.get(b"missing").unwrap(), None);
}

#[test]
fn test_nonces_survive_reopening_database() {
    let dir = tempfile::tempdir().unwrap();
    let (wallet, address) = wallet();
    let resolver = FixedResolver::new([(address, 0)]);

    {
        let signer = MessageSigner::new(&wallet, &resolver, common::create_store(dir.path()));

        for expected in 0..3 {
            assert_eq!(signer.sign_message(message(address)).unwrap().nonce(), expected);
        }
    }

    let signer = MessageSigner::new(&wallet, &resolver, common::create_store(dir.path()));

    assert_eq!(signer.sign_message(message(address)).unwrap().nonce(), 3);
    assert_eq!(resolver.calls(), 1);
}

#[test]
fn test_concurrent_signing_yields_distinct_nonces() {
    let dir = tempfile::tempdir().unwrap();
    let (wallet, address) = wallet();
    let resolver = FixedResolver::new([(address, 100)]);
    let signer = MessageSigner::new(wallet, &resolver, common::create_store(dir.path()));

    let nonces = thread::scope(|s| {
        let handles = (0..4)
            .map(|_| {
                s.spawn(|| {
                    (0..10)
                        .map(|_| signer.sign_message(message(address)).unwrap().nonce())
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect::<HashSet<_>>()
    });

    assert_eq!(nonces, (100..140).collect::<HashSet<_>>());
    assert_eq!(signer.stored_nonce(&address).unwrap(), Some(139));
}

#[test]
fn test_corrupt_entry_on_disk_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (wallet, address) = wallet();
    let store = common::create_store(dir.path());
    let negative_one = [0x20];

    Namespaced::new("/message-signer", &store)
        .put(&NonceStore::<RocksDbMetadataStore>::key(&address), &negative_one)
        .unwrap();

    let signer = MessageSigner::new(wallet, FixedResolver::default(), &store);
    let error = signer.sign_message(message(address)).unwrap_err();

    assert!(matches!(error, Error::Nonce(NonceError::CorruptEntry(_))));
    assert!(!error.nonce_spent());
}
