extern crate serde_bytes;
extern crate serde_xdr;

use serde::{ser::SerializeStruct, Serialize, Serializer};
use serde_derive::Deserialize;

use super::{
    nfs4_proto::{ClientAddr4, DeviceError4, Deviceid4, Length4, NfsFh4, Offset4, Stateid4},
    utils::{from_bytes, to_bytes},
};

/*
 * Layout type specific bodies carried opaquely inside LAYOUTGET and
 * GETDEVICEINFO results. This code was derived from RFC 5661 section 13
 * (NFSv4.1 file layout) and RFC 8435 (flexible file layout).
 */

pub type Netaddr4 = ClientAddr4;
pub type MultipathList4 = Vec<Netaddr4>;

/*
 * nfl_util4 bits
 */
pub const NFL4_UFLG_MASK: u32 = 0x0000003F;
pub const NFL4_UFLG_DENSE: u32 = 0x00000001;
pub const NFL4_UFLG_COMMIT_THRU_MDS: u32 = 0x00000002;
pub const NFL4_UFLG_STRIPE_UNIT_SIZE_MASK: u32 = 0xFFFFFFC0;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NfsFh4Opaque {
    #[serde(with = "serde_bytes")]
    pub fh: NfsFh4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Nfsv41FileLayout4 {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub nfl_deviceid: Deviceid4,
    pub nfl_util: u32,
    pub nfl_first_stripe_index: u32,
    pub nfl_pattern_offset: Offset4,
    pub nfl_fh_list: Vec<NfsFh4Opaque>,
}

impl Nfsv41FileLayout4 {
    pub fn from_bytes(body: &[u8]) -> Result<Self, anyhow::Error> {
        from_bytes(body)
    }

    pub fn stripe_unit(&self) -> u32 {
        self.nfl_util & NFL4_UFLG_STRIPE_UNIT_SIZE_MASK
    }

    pub fn is_dense(&self) -> bool {
        self.nfl_util & NFL4_UFLG_DENSE != 0
    }

    pub fn commit_through_mds(&self) -> bool {
        self.nfl_util & NFL4_UFLG_COMMIT_THRU_MDS != 0
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Nfsv41FileLayoutDsAddr4 {
    pub nflda_stripe_indices: Vec<u32>,
    pub nflda_multipath_ds_list: Vec<MultipathList4>,
}

impl Nfsv41FileLayoutDsAddr4 {
    pub fn from_bytes(body: &[u8]) -> Result<Self, anyhow::Error> {
        from_bytes(body)
    }
}

/*
 * Flexible file layout, ffv4_flags4 bits
 */
pub const FF_FLAGS_NO_LAYOUTCOMMIT: u32 = 0x00000001;
pub const FF_FLAGS_NO_IO_THRU_MDS: u32 = 0x00000002;
pub const FF_FLAGS_NO_READ_IO: u32 = 0x00000004;
pub const FF_FLAGS_WRITE_ONE_MIRROR: u32 = 0x00000008;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FfDataServer4 {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub ffds_deviceid: Deviceid4,
    pub ffds_efficiency: u32,
    pub ffds_stateid: Stateid4,
    pub ffds_fh_vers: Vec<NfsFh4Opaque>,
    pub ffds_user: String,
    pub ffds_group: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FfMirror4 {
    pub ffm_data_servers: Vec<FfDataServer4>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FfLayout4 {
    pub ffl_stripe_unit: Length4,
    pub ffl_mirrors: Vec<FfMirror4>,
    pub ffl_flags: u32,
    pub ffl_stats_collect_hint: u32,
}

impl FfLayout4 {
    pub fn from_bytes(body: &[u8]) -> Result<Self, anyhow::Error> {
        from_bytes(body)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FfDeviceVersions4 {
    pub ffdv_version: u32,
    pub ffdv_minorversion: u32,
    pub ffdv_rsize: u32,
    pub ffdv_wsize: u32,
    pub ffdv_tightly_coupled: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FfDeviceAddr4 {
    pub ffda_netaddrs: MultipathList4,
    pub ffda_versions: Vec<FfDeviceVersions4>,
}

impl FfDeviceAddr4 {
    pub fn from_bytes(body: &[u8]) -> Result<Self, anyhow::Error> {
        from_bytes(body)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FfIoErr4 {
    pub ffie_offset: Offset4,
    pub ffie_length: Length4,
    pub ffie_stateid: Stateid4,
    pub ffie_errors: Vec<DeviceError4>,
}

/*
 * ff_layoutreturn4 body. I/O statistics are never reported, so the
 * fflr_iostats_report array is always empty.
 */
#[derive(Clone, Debug, Default)]
pub struct FfLayoutReturn4 {
    pub fflr_ioerr_report: Vec<FfIoErr4>,
}

impl Serialize for FfLayoutReturn4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_struct("FfLayoutReturn4", 2)?;
        seq.serialize_field("fflr_ioerr_report", &self.fflr_ioerr_report)?;
        seq.serialize_field("fflr_iostats_report", &0u32)?;
        seq.end()
    }
}

impl FfLayoutReturn4 {
    pub fn to_bytes(&self) -> Result<Vec<u8>, anyhow::Error> {
        to_bytes(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_layout_util_bits() {
        let layout = Nfsv41FileLayout4 {
            nfl_deviceid: [7; 16],
            nfl_util: 65536 | NFL4_UFLG_DENSE | NFL4_UFLG_COMMIT_THRU_MDS,
            nfl_first_stripe_index: 0,
            nfl_pattern_offset: 0,
            nfl_fh_list: vec![NfsFh4Opaque { fh: vec![1, 2, 3] }],
        };
        assert_eq!(layout.stripe_unit(), 65536);
        assert!(layout.is_dense());
        assert!(layout.commit_through_mds());

        let body = to_bytes(&layout).unwrap();
        let decoded = Nfsv41FileLayout4::from_bytes(&body).unwrap();
        assert_eq!(decoded, layout);
    }

    #[test]
    fn test_empty_flex_layoutreturn_body() {
        let body = FfLayoutReturn4::default().to_bytes().unwrap();
        assert_eq!(body, vec![0u8; 8]);
    }
}
