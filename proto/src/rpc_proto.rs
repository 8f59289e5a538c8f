extern crate serde;
extern crate serde_bytes;
extern crate serde_derive;
extern crate serde_xdr;

use serde::{ser::SerializeStruct, Serialize, Serializer};
use serde_derive::Deserialize;

use super::{
    nfs4_proto::{Compound4args, Compound4res, NFS4_PROGRAM, NFSPROC4_COMPOUND, NFSPROC4_NULL, NFS_V4},
    utils::{from_bytes, to_bytes},
};

pub const RPC_VERSION: u32 = 2;

pub const AUTH_NONE: u32 = 0;
pub const AUTH_SYS: u32 = 1;

#[derive(Clone, Debug, Deserialize, Serialize, Default)]
pub struct AuthUnix {
    pub stamp: u32,
    pub machinename: String,
    pub uid: u32,
    pub gid: u32,
    pub gids: Vec<u32>,
}

/*
 * opaque_auth: the credential body is opaque on the wire, so an
 * AUTH_SYS credential is encoded first and carried as bytes.
 */
#[derive(Clone, Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct OpaqueAuth {
    pub flavor: u32,
    #[serde(with = "serde_bytes_ng")]
    pub body: Vec<u8>,
}

impl OpaqueAuth {
    pub fn none() -> Self {
        OpaqueAuth {
            flavor: AUTH_NONE,
            body: Vec::new(),
        }
    }

    pub fn unix(cred: &AuthUnix) -> Result<Self, anyhow::Error> {
        Ok(OpaqueAuth {
            flavor: AUTH_SYS,
            body: to_bytes(cred)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CallBody {
    pub rpcvers: u32,
    pub prog: u32,
    pub vers: u32,
    pub proc: u32,
    pub cred: OpaqueAuth,
    pub verf: OpaqueAuth,
    pub args: Option<Compound4args>,
}

impl CallBody {
    pub fn compound(cred: OpaqueAuth, args: Compound4args) -> Self {
        CallBody {
            rpcvers: RPC_VERSION,
            prog: NFS4_PROGRAM,
            vers: NFS_V4,
            proc: NFSPROC4_COMPOUND,
            cred,
            verf: OpaqueAuth::none(),
            args: Some(args),
        }
    }

    pub fn null(cred: OpaqueAuth) -> Self {
        CallBody {
            rpcvers: RPC_VERSION,
            prog: NFS4_PROGRAM,
            vers: NFS_V4,
            proc: NFSPROC4_NULL,
            cred,
            verf: OpaqueAuth::none(),
            args: None,
        }
    }
}

// procedure arguments follow the header without an optional-data prefix
impl Serialize for CallBody {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.args.is_some() { 7 } else { 6 };
        let mut seq = serializer.serialize_struct("CallBody", len)?;
        seq.serialize_field("rpcvers", &self.rpcvers)?;
        seq.serialize_field("prog", &self.prog)?;
        seq.serialize_field("vers", &self.vers)?;
        seq.serialize_field("proc", &self.proc)?;
        seq.serialize_field("cred", &self.cred)?;
        seq.serialize_field("verf", &self.verf)?;
        if let Some(args) = &self.args {
            seq.serialize_field("args", args)?;
        }
        seq.end()
    }
}

pub const MSG_TYPE_CALL: u32 = 0;
pub const MSG_TYPE_REPLY: u32 = 1;

#[derive(Debug, Clone)]
pub struct RpcCallMsg {
    pub xid: u32,
    pub body: CallBody,
}

impl Serialize for RpcCallMsg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_struct("RpcCallMsg", 3)?;
        seq.serialize_field("xid", &self.xid)?;
        seq.serialize_field("mtype", &MSG_TYPE_CALL)?;
        seq.serialize_field("body", &self.body)?;
        seq.end()
    }
}

impl RpcCallMsg {
    pub fn to_bytes(&self) -> Result<Vec<u8>, anyhow::Error> {
        to_bytes(self)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MismatchInfo {
    pub low: u32,
    pub high: u32,
}

/*
 * Only replies arrive on the fore channel; Call keeps the index of
 * REPLY at 1.
 */
#[derive(Debug, Clone, Deserialize, Serialize)]
#[repr(u32)]
pub enum MsgType {
    Call = 0,
    Reply(ReplyBody) = 1,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptedReply {
    pub verf: OpaqueAuth,
    pub reply_data: AcceptBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum ReplyBody {
    MsgAccepted(AcceptedReply) = 0,
    MsgDenied(RejectedReply) = 1,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[repr(u32)]
pub enum AcceptBody {
    Success(Compound4res) = 0,
    ProgUnavail = 1,
    /// remote can't support version #
    ProgMismatch(MismatchInfo) = 2,
    ProcUnavail = 3,
    /// procedure can't decode params
    GarbageArgs = 4,
    SystemErr = 5,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[repr(u32)]
pub enum RejectedReply {
    RpcMismatch(MismatchInfo) = 0,
    AuthError(AuthStat) = 1,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, Serialize, PartialEq, Eq)]
#[repr(u32)]
///   Why authentication failed
pub enum AuthStat {
    AuthOk = 0,
    /// bad credentials (seal broken)
    #[default]
    AuthBadCred = 1,
    /// client must begin new session
    AuthRejectedCred = 2,
    /// bad verifier (seal broken)
    AuthBadverf = 3,
    /// verifier expired or replayed
    AuthRejectedverf = 4,
    /// rejected for security reasons
    AuthTooWeak = 5,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcReplyMsg {
    pub xid: u32,
    pub body: MsgType,
}

impl RpcReplyMsg {
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, anyhow::Error> {
        from_bytes(buffer)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, anyhow::Error> {
        to_bytes(self)
    }
}

/*
 * Leading words of every reply, enough to tell accepted from denied.
 */
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcReplyHeader {
    pub xid: u32,
    pub mtype: u32,
    pub reply_stat: u32,
}

impl RpcReplyHeader {
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, anyhow::Error> {
        from_bytes(buffer)
    }
}

/*
 * NULL replies carry no procedure result; decoding stops after the
 * accept status.
 */
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RpcNullReply {
    pub xid: u32,
    pub mtype: u32,
    pub reply_stat: u32,
    pub verf: OpaqueAuth,
    pub accept_stat: u32,
}

impl RpcNullReply {
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, anyhow::Error> {
        from_bytes(buffer)
    }
}

/// Read the transaction id of a reply record without decoding it.
pub fn peek_xid(buffer: &[u8]) -> Option<u32> {
    let bytes: [u8; 4] = buffer.get(..4)?.try_into().ok()?;
    Some(u32::from_be_bytes(bytes))
}
