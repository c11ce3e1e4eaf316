//! Filter objects for paged relay queries.

use crate::utils::error::Result;
use crate::validator::require_address;
use serde::Serialize;

/// Filter for `loopring_getFills`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_version: Option<String>,
}

impl FillFilter {
    pub fn validate(&self) -> Result<()> {
        if let Some(address) = &self.address {
            require_address(address, "fill owner")?;
        }
        Ok(())
    }
}

/// Filter for `loopring_getRingMined`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RingMinedFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_version: Option<String>,
}

impl RingMinedFilter {
    pub fn validate(&self) -> Result<()> {
        if let Some(miner) = &self.miner {
            require_address(miner, "miner")?;
        }
        Ok(())
    }
}
