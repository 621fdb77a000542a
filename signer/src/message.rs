use {
    alloy::primitives::SignatureError,
    alloy_rlp::{RlpDecodable, RlpEncodable},
    nonced_shared::primitives::{Address, B256, Bytes, Signature, U256, keccak256},
};

/// An unsigned message sent by account `from`.
///
/// The signer owns none of it except [`Self::nonce`], which it overwrites before signing.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    RlpEncodable,
    RlpDecodable,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub version: u64,
    pub to: Address,
    pub from: Address,
    pub nonce: u64,
    pub value: U256,
    pub gas_limit: u64,
    pub gas_fee_cap: U256,
    pub gas_premium: U256,
    pub method: u64,
    pub params: Bytes,
}

impl Message {
    /// Keccak-256 of the RLP encoding. This is what gets signed.
    pub fn digest(&self) -> B256 {
        keccak256(alloy_rlp::encode(self))
    }
}

/// A [`Message`] together with its sender's signature over [`Message::digest`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SignedMessage {
    message: Message,
    signature: Signature,
}

impl SignedMessage {
    pub fn new(message: Message, signature: Signature) -> Self {
        Self { message, signature }
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn nonce(&self) -> u64 {
        self.message.nonce
    }

    pub fn recover_signer(&self) -> Result<Address, SignatureError> {
        self.signature
            .recover_address_from_prehash(&self.message.digest())
    }
}
