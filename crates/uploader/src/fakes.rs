//! Deterministic in-memory fakes for the consumed collaborators.

use std::sync::Mutex;

use alloy_primitives::{keccak256, Bytes, B256, U256};
use anyhow::bail;
use async_trait::async_trait;
use waimea_types::PreimageOracleData;

use crate::contract::{LargePreimageMetaData, Leaf, PreimageOracleContract};
use crate::txmgr::{TxCandidate, TxReceipt, TxSender, TxStatus};
use crate::uuid::UuidSource;

/// Calldata tags so tests can tell candidates apart in submission order.
pub(crate) const INIT_TAG: u8 = 1;
pub(crate) const LEAF_TAG: u8 = 2;
pub(crate) const GLOBAL_TAG: u8 = 3;

/// Records contract calls and hands back tagged candidates. `add_leaves`
/// packs one candidate per leaf so sequential submission stays observable.
#[derive(Debug, Default)]
pub(crate) struct FakeOracleContract {
    pub(crate) init_calls: Mutex<Vec<(U256, u32, u32)>>,
    pub(crate) add_calls: Mutex<Vec<(U256, Vec<Leaf>, bool)>>,
    pub(crate) global_calls: Mutex<Vec<PreimageOracleData>>,
    pub(crate) fail_init: bool,
    pub(crate) fail_add_leaves: bool,
    pub(crate) fail_global: bool,
}

#[async_trait]
impl PreimageOracleContract for FakeOracleContract {
    fn init_large_preimage(
        &self,
        uuid: U256,
        part_offset: u32,
        claimed_size: u32,
    ) -> anyhow::Result<TxCandidate> {
        if self.fail_init {
            bail!("init large preimage build failed");
        }
        self.init_calls
            .lock()
            .unwrap()
            .push((uuid, part_offset, claimed_size));
        Ok(TxCandidate {
            tx_data: Bytes::from(vec![INIT_TAG]),
            ..Default::default()
        })
    }

    fn add_leaves(
        &self,
        uuid: U256,
        leaves: &[Leaf],
        finalize: bool,
    ) -> anyhow::Result<Vec<TxCandidate>> {
        if self.fail_add_leaves {
            bail!("add leaves build failed");
        }
        self.add_calls
            .lock()
            .unwrap()
            .push((uuid, leaves.to_vec(), finalize));
        Ok(leaves
            .iter()
            .map(|leaf| TxCandidate {
                tx_data: Bytes::from(vec![LEAF_TAG, leaf.index.to::<u8>()]),
                ..Default::default()
            })
            .collect())
    }

    fn add_global_data_tx(&self, data: &PreimageOracleData) -> anyhow::Result<TxCandidate> {
        if self.fail_global {
            bail!("global data build failed");
        }
        self.global_calls.lock().unwrap().push(data.clone());
        Ok(TxCandidate {
            tx_data: Bytes::from(vec![GLOBAL_TAG]),
            ..Default::default()
        })
    }

    async fn get_active_preimages(
        &self,
        _block_hash: B256,
    ) -> anyhow::Result<Vec<LargePreimageMetaData>> {
        Ok(Vec::new())
    }
}

/// Records candidates in submission order. `fail_at` errors the n-th send
/// (0-based); `status` is reported for every mined transaction.
#[derive(Debug)]
pub(crate) struct FakeTxSender {
    pub(crate) sent: Mutex<Vec<TxCandidate>>,
    pub(crate) status: TxStatus,
    pub(crate) fail_at: Option<usize>,
}

impl Default for FakeTxSender {
    fn default() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            status: TxStatus::Success,
            fail_at: None,
        }
    }
}

#[async_trait]
impl TxSender for FakeTxSender {
    async fn send(&self, candidate: TxCandidate) -> anyhow::Result<TxReceipt> {
        let mut sent = self.sent.lock().unwrap();
        if self.fail_at == Some(sent.len()) {
            bail!("tx broadcast failed");
        }
        let tx_hash = keccak256(&candidate.tx_data);
        sent.push(candidate);
        Ok(TxReceipt {
            status: self.status,
            tx_hash,
        })
    }
}

/// Always yields the same identifier.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedUuidSource(pub(crate) U256);

impl UuidSource for FixedUuidSource {
    fn new_uuid(&self) -> anyhow::Result<U256> {
        Ok(self.0)
    }
}

/// Simulates an entropy source failure.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FailingUuidSource;

impl UuidSource for FailingUuidSource {
    fn new_uuid(&self) -> anyhow::Result<U256> {
        bail!("entropy source unavailable");
    }
}
