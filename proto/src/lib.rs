extern crate serde_xdr;

pub mod layout_proto;
pub mod nfs4_proto;
pub mod rpc_proto;
pub mod utils;

pub use utils::{from_bytes, to_bytes};
