use async_trait::async_trait;
use waimea_types::PreimageOracleData;

use crate::errors::UploadError;
use crate::PreimageUploader;

/// Routes a preimage upload to the direct or large uploader.
///
/// Local preimage parts always fit in a single call. Global preimages are
/// streamed once their raw length reaches the size threshold.
#[derive(Debug)]
pub struct SplitPreimageUploader<D, L> {
    pub(crate) direct: D,
    pub(crate) large: L,
    large_preimage_size_threshold: usize,
}

impl<D, L> SplitPreimageUploader<D, L> {
    /// Creates a new [SplitPreimageUploader] with the given streaming
    /// threshold in bytes.
    pub const fn new(direct: D, large: L, large_preimage_size_threshold: usize) -> Self {
        Self {
            direct,
            large,
            large_preimage_size_threshold,
        }
    }
}

#[async_trait]
impl<D, L> PreimageUploader for SplitPreimageUploader<D, L>
where
    D: PreimageUploader + Send + Sync,
    L: PreimageUploader + Send + Sync,
{
    async fn upload_preimage(
        &self,
        parent_claim_index: u64,
        data: &PreimageOracleData,
    ) -> Result<(), UploadError> {
        if data.is_local || data.oracle_data.len() < self.large_preimage_size_threshold {
            self.direct.upload_preimage(parent_claim_index, data).await
        } else {
            self.large.upload_preimage(parent_claim_index, data).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FakeOracleContract, FakeTxSender, FixedUuidSource};
    use crate::{DirectPreimageUploader, LargePreimageUploader};
    use alloy_primitives::{Bytes, U256};

    const THRESHOLD: usize = 1000;

    type Split = SplitPreimageUploader<
        DirectPreimageUploader<FakeOracleContract, FakeTxSender>,
        LargePreimageUploader<FakeOracleContract, FakeTxSender, FixedUuidSource>,
    >;

    fn split_uploader() -> Split {
        SplitPreimageUploader::new(
            DirectPreimageUploader::new(FakeOracleContract::default(), FakeTxSender::default()),
            LargePreimageUploader::new(
                FakeOracleContract::default(),
                FakeTxSender::default(),
                FixedUuidSource(U256::from(1u64)),
            ),
            THRESHOLD,
        )
    }

    fn data(key_tag: u8, len: usize) -> PreimageOracleData {
        PreimageOracleData::new(
            Bytes::from(vec![key_tag; 32]),
            Bytes::from(vec![3u8; len]),
            0,
        )
    }

    #[tokio::test]
    async fn test_local_data_goes_direct() {
        let uploader = split_uploader();
        uploader
            .upload_preimage(0, &data(0, THRESHOLD * 2))
            .await
            .unwrap();
        assert_eq!(uploader.direct.contract.global_calls.lock().unwrap().len(), 1);
        assert!(uploader.large.contract.init_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_small_global_data_goes_direct() {
        let uploader = split_uploader();
        uploader
            .upload_preimage(0, &data(2, THRESHOLD - 1))
            .await
            .unwrap();
        assert_eq!(uploader.direct.contract.global_calls.lock().unwrap().len(), 1);
        assert!(uploader.large.contract.init_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_threshold_global_data_is_streamed() {
        let uploader = split_uploader();
        let result = uploader.upload_preimage(0, &data(2, THRESHOLD)).await;
        assert!(matches!(result, Err(UploadError::NotSupported)));
        assert!(uploader.direct.contract.global_calls.lock().unwrap().is_empty());
        assert_eq!(uploader.large.contract.init_calls.lock().unwrap().len(), 1);
    }
}
