pub use alloy::primitives::{
    Address, B256, Bytes, PrimitiveSignature as Signature, U256, keccak256,
};

/// Renders a value as the segment used to key its entries in persistent storage.
///
/// The rendering must stay stable across releases: changing it orphans every entry
/// written by an older version.
pub trait ToAccountKey {
    fn to_account_key(&self) -> String;
}

impl ToAccountKey for Address {
    fn to_account_key(&self) -> String {
        alloy::hex::encode_prefixed(self.as_slice())
    }
}
