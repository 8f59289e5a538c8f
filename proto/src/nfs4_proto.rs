extern crate serde_bytes;
extern crate serde_xdr;
use super::utils::{read_attrs, write_attrs};

use num_derive::{FromPrimitive, ToPrimitive};

use serde_derive::{Deserialize, Serialize};

/*
 * This code was derived from RFC 7531 (NFSv4.0), RFC 5662 (NFSv4.1)
 * and RFC 7863 (NFSv4.2). Only the client side of the protocol is
 * carried: argument types are serialized, result types deserialized.
 */

/*
 * Sizes
 */
pub const NFS4_FHSIZE: u32 = 128;
pub const NFS4_VERIFIER_SIZE: usize = 8;
pub const NFS4_OTHER_SIZE: usize = 12;
pub const NFS4_SESSIONID_SIZE: usize = 16;
pub const NFS4_DEVICEID4_SIZE: usize = 16;
pub const NFS4_OPAQUE_LIMIT: u32 = 1024;

pub const NFS4_UINT64_MAX: u64 = 0xffffffffffffffff;
pub const NFS4_UINT32_MAX: u32 = 0xffffffff;

/*
 * NFS program and procedures
 */
pub const NFS4_PROGRAM: u32 = 100003;
pub const NFS_V4: u32 = 4;
pub const NFSPROC4_NULL: u32 = 0;
pub const NFSPROC4_COMPOUND: u32 = 1;

/*
 * File types
 */
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, ToPrimitive, FromPrimitive)]
#[repr(u32)]
pub enum NfsFtype4 {
    Nf4Undef = 0,     /* undefined */
    Nf4reg = 1,       /* Regular File */
    Nf4dir = 2,       /* Directory */
    Nf4blk = 3,       /* Special File - block device */
    Nf4chr = 4,       /* Special File - character device */
    Nf4lnk = 5,       /* Symbolic Link */
    Nf4sock = 6,      /* Special File - socket */
    Nf4fifo = 7,      /* Special File - fifo */
    Nf4attrdir = 8,   /* Attribute Directory */
    Nf4namedattr = 9, /* Named Attribute */
}

/*
 * Error status
 */
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, ToPrimitive, FromPrimitive)]
#[repr(u32)]
pub enum NfsStat4 {
    Nfs4Ok = 0,         /* everything is okay       */
    Nfs4errPerm = 1,    /* caller not privileged    */
    Nfs4errNoent = 2,   /* no such file/directory   */
    Nfs4errIo = 5,      /* hard I/O error           */
    Nfs4errNxio = 6,    /* no such device           */
    Nfs4errAccess = 13, /* access denied            */
    Nfs4errExist = 17,  /* file already exists      */
    Nfs4errXdev = 18,   /* different file systems   */
    /* Unused/reserved        19 */
    Nfs4errNotdir = 20,               /* should be a directory    */
    Nfs4errIsdir = 21,                /* should not be directory  */
    Nfs4errInval = 22,                /* invalid argument         */
    Nfs4errFbig = 27,                 /* file exceeds server max  */
    Nfs4errNospc = 28,                /* no space on file system  */
    Nfs4errRofs = 30,                 /* read-only file system    */
    Nfs4errMlink = 31,                /* too many hard links      */
    Nfs4errNametoolong = 63,          /* name exceeds server max  */
    Nfs4errNotempty = 66,             /* directory not empty      */
    Nfs4errDquot = 69,                /* hard quota limit reached */
    Nfs4errStale = 70,                /* file no longer exists    */
    Nfs4errBadhandle = 10001,         /* Illegal filehandle       */
    Nfs4errBadCookie = 10003,         /* READDIR cookie is stale  */
    Nfs4errNotsupp = 10004,           /* operation not supported  */
    Nfs4errToosmall = 10005,          /* response limit exceeded  */
    Nfs4errServerfault = 10006,       /* undefined server error   */
    Nfs4errBadtype = 10007,           /* type invalid for CREATE  */
    Nfs4errDelay = 10008,             /* file "busy" - retry      */
    Nfs4errSame = 10009,              /* nverify says attrs same  */
    Nfs4errDenied = 10010,            /* lock unavailable         */
    Nfs4errExpired = 10011,           /* lock lease expired       */
    Nfs4errLocked = 10012,            /* I/O failed due to lock   */
    Nfs4errGrace = 10013,             /* in grace period          */
    Nfs4errFhexpired = 10014,         /* filehandle expired       */
    Nfs4errShareDenied = 10015,       /* share reserve denied     */
    Nfs4errWrongsec = 10016,          /* wrong security flavor    */
    Nfs4errClidInuse = 10017,         /* clientid in use          */
    Nfs4errResource = 10018,          /* resource exhaustion      */
    Nfs4errMoved = 10019,             /* file system relocated    */
    Nfs4errNofilehandle = 10020,      /* current FH is not set    */
    Nfs4errMinorVersMismatch = 10021, /* minor vers not supp */
    Nfs4errStaleClientid = 10022,     /* server has rebooted      */
    Nfs4errStaleStateid = 10023,      /* server has rebooted      */
    Nfs4errOldStateid = 10024,        /* state is out of sync     */
    Nfs4errBadStateid = 10025,        /* incorrect stateid        */
    Nfs4errBadSeqid = 10026,          /* request is out of seq.   */
    Nfs4errNotSame = 10027,           /* verify - attrs not same  */
    Nfs4errLockRange = 10028,         /* lock range not supported */
    Nfs4errSymlink = 10029,           /* should be file/directory */
    Nfs4errRestorefh = 10030,         /* no saved filehandle      */
    Nfs4errLeaseMoved = 10031,        /* some file system moved   */
    Nfs4errAttrnotsupp = 10032,       /* recommended attr not sup */
    Nfs4errNoGrace = 10033,           /* reclaim outside of grace */
    Nfs4errReclaimBad = 10034,        /* reclaim error at server  */
    Nfs4errReclaimConflict = 10035,   /* conflict on reclaim    */
    Nfs4errBadxdr = 10036,            /* XDR decode failed        */
    Nfs4errLocksHeld = 10037,         /* file locks held at CLOSE */
    Nfs4errOpenmode = 10038,          /* conflict in OPEN and I/O */
    Nfs4errBadOwner = 10039,          /* Owner translation bad    */
    Nfs4errBadchar = 10040,           /* UTF-8 char not supported */
    Nfs4errBadname = 10041,           /* name not supported       */
    Nfs4errBadRange = 10042,          /* lock range not supported */
    Nfs4errLockNotsupp = 10043,       /* no atomic up/downgrade   */
    Nfs4errOpIllegal = 10044,         /* undefined operation      */
    Nfs4errDeadlock = 10045,          /* file locking deadlock    */
    Nfs4errFileOpen = 10046,          /* open file blocks op.     */
    Nfs4errAdminRevoked = 10047,      /* lock-Owner state revoked */
    Nfs4errCbPathDown = 10048,        /* callback path down       */
    /* NFSv4.1 */
    Nfs4errBadiomode = 10049,
    Nfs4errBadlayout = 10050,
    Nfs4errBadSessionDigest = 10051,
    Nfs4errBadsession = 10052,
    Nfs4errBadslot = 10053,
    Nfs4errCompleteAlready = 10054,
    Nfs4errConnNotBoundToSession = 10055,
    Nfs4errDelegAlreadyWanted = 10056,
    Nfs4errBackChanBusy = 10057,
    Nfs4errLayouttrylater = 10058,
    Nfs4errLayoutunavailable = 10059,
    Nfs4errNomatchingLayout = 10060,
    Nfs4errRecallconflict = 10061,
    Nfs4errUnknownLayouttype = 10062,
    Nfs4errSeqMisordered = 10063,
    Nfs4errSequencePos = 10064,
    Nfs4errReqTooBig = 10065,
    Nfs4errRepTooBig = 10066,
    Nfs4errRepTooBigToCache = 10067,
    Nfs4errRetryUncachedRep = 10068,
    Nfs4errUnsafeCompound = 10069,
    Nfs4errTooManyOps = 10070,
    Nfs4errOpNotInSession = 10071,
    Nfs4errHashAlgUnsupp = 10072,
    /* Unused/reserved        10073 */
    Nfs4errClientidBusy = 10074,
    Nfs4errPnfsIoHole = 10075,
    Nfs4errSeqFalseRetry = 10076,
    Nfs4errBadHighSlot = 10077,
    Nfs4errDeadsession = 10078,
    Nfs4errEncrAlgUnsupp = 10079,
    Nfs4errPnfsNoLayout = 10080,
    Nfs4errNotOnlyOp = 10081,
    Nfs4errWrongCred = 10082,
    Nfs4errWrongType = 10083,
    Nfs4errDirdelegUnavail = 10084,
    Nfs4errRejectDeleg = 10085,
    Nfs4errReturnconflict = 10086,
    Nfs4errDelegRevoked = 10087,
    /* NFSv4.2 */
    Nfs4errPartnerNotsupp = 10088,
    Nfs4errPartnerNoAuth = 10089,
    Nfs4errUnionNotsupp = 10090,
    Nfs4errOffloadDenied = 10091,
    Nfs4errWrongLfs = 10092,
    Nfs4errBadlabel = 10093,
    Nfs4errOffloadNoReqs = 10094,
    Nfs4errNoxattr = 10095,
    Nfs4errXattr2big = 10096,
}

/*
 * Basic data types
 */
pub type Bitmap4 = Vec<u32>;
pub type Changeid4 = u64;
pub type Clientid4 = u64;
pub type Count4 = u32;
pub type Length4 = u64;
pub type NfsFh4 = Vec<u8>;
pub type NfsLease4 = u32;
pub type Offset4 = u64;
pub type Seqid4 = u32;
pub type Sequenceid4 = u32;
pub type Slotid4 = u32;
pub type Component4 = String;
pub type Verifier4 = [u8; NFS4_VERIFIER_SIZE];
pub type Sessionid4 = [u8; NFS4_SESSIONID_SIZE];
pub type Deviceid4 = [u8; NFS4_DEVICEID4_SIZE];

/*
 * Timeval
 */
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Nfstime4 {
    pub seconds: i64,
    pub nseconds: u32,
}

/*
 *  FSID pub structure for major/minor
 */
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Fsid4 {
    pub major: u64,
    pub minor: u64,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Nfsace4 {
    pub acetype: u32,
    pub flag: u32,
    pub access_mask: u32,
    pub who: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Specdata4 {
    pub specdata1: u32,
    pub specdata2: u32,
}

pub const MODE4_RUSR: u32 = 0x100; /* read permission: Owner */
pub const MODE4_WUSR: u32 = 0x080; /* write permission: Owner */
pub const MODE4_RGRP: u32 = 0x020; /* read permission: group */
pub const MODE4_ROTH: u32 = 0x004; /* read permission: other */

/*
 * Attributes the client knows how to decode. Decoding stops at the
 * first attribute outside this list, so requests only ever ask for these.
 */
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, FromPrimitive, ToPrimitive)]
#[repr(u32)]
pub enum FileAttr {
    SupportedAttrs = 0,
    Type = 1,
    FhExpireType = 2,
    Change = 3,
    Size = 4,
    LinkSupport = 5,
    SymlinkSupport = 6,
    NamedAttr = 7,
    Fsid = 8,
    UniqueHandles = 9,
    LeaseTime = 10,
    RdattrError = 11,
    Fileid = 20,
    Maxread = 30,
    Maxwrite = 31,
    Mode = 33,
    Numlinks = 35,
    Owner = 36,
    OwnerGroup = 37,
    SpaceUsed = 45,
    TimeAccess = 47,
    TimeMetadata = 52,
    TimeModify = 53,
    MountedOnFileid = 55,
    /* NFSv4.1 */
    FsLayoutTypes = 62,
    LayoutBlksize = 65,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FileAttrValue {
    SupportedAttrs(Vec<FileAttr>),
    Type(NfsFtype4),
    FhExpireType(u32),
    Change(Changeid4),
    Size(u64),
    LinkSupport(bool),
    SymlinkSupport(bool),
    NamedAttr(bool),
    Fsid(Fsid4),
    UniqueHandles(bool),
    LeaseTime(NfsLease4),
    RdattrError(NfsStat4),
    Fileid(u64),
    Maxread(u64),
    Maxwrite(u64),
    Mode(u32),
    Numlinks(u32),
    Owner(String),
    OwnerGroup(String),
    SpaceUsed(u64),
    TimeAccess(Nfstime4),
    TimeMetadata(Nfstime4),
    TimeModify(Nfstime4),
    MountedOnFileid(u64),
    FsLayoutTypes(Vec<LayoutType4>),
    LayoutBlksize(u32),
}

/*
 * File attribute container
 */
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Fattr4 {
    pub attrmask: Vec<FileAttr>,
    pub attr_vals: Vec<FileAttrValue>,
}

/*
 * Change info for the client
 */
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChangeInfo4 {
    pub atomic: bool,
    pub before: Changeid4,
    pub after: Changeid4,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ClientAddr4 {
    /* see struct rpcb in RFC 1833 */
    pub rnetid: String, /* network id */
    pub raddr: String,  /* universal address */
}

/*
 * Callback program info as provided by the client
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CbClient4 {
    pub cb_program: u32,
    pub cb_location: ClientAddr4,
}

/*
 * Stateid
 */
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Stateid4 {
    pub seqid: u32,
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub other: [u8; NFS4_OTHER_SIZE],
}

/*
 * Client ID
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NfsClientId4 {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub verifier: Verifier4,
    pub id: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct OpenOwner4 {
    pub clientid: Clientid4,
    #[serde(with = "serde_bytes_ng")]
    pub owner: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct LockOwner4 {
    pub clientid: Clientid4,
    #[serde(with = "serde_bytes_ng")]
    pub owner: Vec<u8>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[repr(u32)]
pub enum NfsLockType4 {
    Undef0 = 0,
    ReadLt = 1,
    WriteLt = 2,
    ReadwLt = 3,  /* blocking read */
    WritewLt = 4, /* blocking write */
}

pub const ACCESS4_READ: u32 = 0x00000001;
pub const ACCESS4_LOOKUP: u32 = 0x00000002;
pub const ACCESS4_MODIFY: u32 = 0x00000004;
pub const ACCESS4_EXTEND: u32 = 0x00000008;
pub const ACCESS4_DELETE: u32 = 0x00000010;
pub const ACCESS4_EXECUTE: u32 = 0x00000020;

/*
 * Status-switched result body: the body is present only for NFS4_OK.
 */
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NfsResult<T> {
    Ok(T),
    Err(NfsStat4),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Access4args {
    pub access: u32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Access4resok {
    pub supported: u32,
    pub access: u32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Close4args {
    pub seqid: Seqid4,
    pub open_stateid: Stateid4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Commit4args {
    /* CURRENT_FH: file */
    pub offset: Offset4,
    pub count: Count4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Commit4resok {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub writeverf: Verifier4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum Createtype4 {
    Undef0 = 0,
    Reg = 1,
    Dir = 2,
    Blk(Specdata4) = 3,
    Chr(Specdata4) = 4,
    Lnk(String) = 5,
    Sock = 6,
    Fifo = 7,
}

#[derive(Clone, Debug, Serialize)]
pub struct Create4args {
    /* CURRENT_FH: directory for creation */
    pub objtype: Createtype4,
    pub objname: Component4,
    pub createattrs: Fattr4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Create4resok {
    pub cinfo: ChangeInfo4,
    #[serde(deserialize_with = "read_attrs", serialize_with = "write_attrs")]
    pub attrset: Vec<FileAttr>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DelegPurge4args {
    pub clientid: Clientid4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DelegReturn4args {
    /* CURRENT_FH: delegated file */
    pub deleg_stateid: Stateid4,
}

#[derive(Clone, Debug, Serialize)]
pub struct Getattr4args {
    /* CURRENT_FH: directory or file */
    #[serde(serialize_with = "write_attrs")]
    pub attr_request: Vec<FileAttr>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Getattr4resok {
    pub obj_attributes: Fattr4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GetFh4resok {
    #[serde(with = "serde_bytes")]
    pub object: NfsFh4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Link4args {
    /* SAVED_FH: source object */
    /* CURRENT_FH: target directory */
    pub newname: Component4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Link4resok {
    pub cinfo: ChangeInfo4,
}

/*
 * For LOCK, transition from open_Owner to new lock_Owner
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpenToLockOwner4 {
    pub open_seqid: Seqid4,
    pub open_stateid: Stateid4,
    pub lock_seqid: Seqid4,
    pub lock_owner: LockOwner4,
}

/*
 * For LOCK, existing lock_Owner continues to request file locks
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExistLockOwner4 {
    pub lock_stateid: Stateid4,
    pub lock_seqid: Seqid4,
}

/*
 * switch (bool new_lock_owner): FALSE is discriminant 0.
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum Locker4 {
    LockOwner(ExistLockOwner4) = 0,
    OpenOwner(OpenToLockOwner4) = 1,
}

/*
 * LOCK/Lockt/Locku: Record lock management
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Lock4args {
    /* CURRENT_FH: file */
    pub locktype: NfsLockType4,
    pub reclaim: bool,
    pub offset: Offset4,
    pub length: Length4,
    pub locker: Locker4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Lock4denied {
    pub offset: Offset4,
    pub length: Length4,
    pub locktype: NfsLockType4,
    pub owner: LockOwner4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Lock4resok {
    pub lock_stateid: Stateid4,
}

/*
 * LOCK4res carries a body for NFS4_OK and for NFS4ERR_DENIED.
 */
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Lock4res {
    Ok(Lock4resok),
    Denied(Lock4denied),
    Err(NfsStat4),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Lockt4args {
    /* CURRENT_FH: file */
    pub locktype: NfsLockType4,
    pub offset: Offset4,
    pub length: Length4,
    pub owner: LockOwner4,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Lockt4res {
    Ok,
    Denied(Lock4denied),
    Err(NfsStat4),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Locku4args {
    /* CURRENT_FH: file */
    pub locktype: NfsLockType4,
    pub seqid: Seqid4,
    pub lock_stateid: Stateid4,
    pub offset: Offset4,
    pub length: Length4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Lookup4args {
    /* CURRENT_FH: directory */
    pub objname: Component4,
}

pub const OPEN4_SHARE_ACCESS_READ: u32 = 0x00000001;
pub const OPEN4_SHARE_ACCESS_WRITE: u32 = 0x00000002;
pub const OPEN4_SHARE_ACCESS_BOTH: u32 = 0x00000003;

pub const OPEN4_SHARE_DENY_NONE: u32 = 0x00000000;
pub const OPEN4_SHARE_DENY_READ: u32 = 0x00000001;
pub const OPEN4_SHARE_DENY_WRITE: u32 = 0x00000002;
pub const OPEN4_SHARE_DENY_BOTH: u32 = 0x00000003;

/*
 * Various definitions for OPEN
 */
#[derive(Clone, Debug, Serialize)]
pub struct CreatVerfAttr {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub cva_verf: Verifier4,
    pub cva_attrs: Fattr4,
}

#[derive(Clone, Debug, Serialize)]
#[repr(u32)]
pub enum CreateHow4 {
    Unchecked4(Fattr4) = 0,
    Guarded4(Fattr4) = 1,
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    Exclusive4(Verifier4) = 2,
    /* NFSv4.1 */
    Exclusive41(CreatVerfAttr) = 3,
}

#[derive(Clone, Debug, Serialize)]
#[repr(u32)]
pub enum OpenFlag4 {
    Open4Nocreate = 0,
    How(CreateHow4) = 1,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NfsModifiedLimit4 {
    pub num_blocks: u32,
    pub bytes_per_block: u32,
}

/*
 * limit_by4 has no zero arm; Undef0 only keeps variant indexes aligned.
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum NfsSpaceLimit4 {
    Undef0 = 0,
    Filesize(u64) = 1,
    ModBlocks(NfsModifiedLimit4) = 2,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[repr(u32)]
pub enum OpenDelegationType4 {
    None = 0,
    Read = 1,
    Write = 2,
    /* NFSv4.1 */
    NoneExt = 3,
}

/* Next definitions used for OPEN delegation */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpenClaimDelegateCur4 {
    pub delegate_stateid: Stateid4,
    pub file: Component4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum OpenClaim4 {
    /* CURRENT_FH: directory */
    ClaimNull(Component4) = 0,
    /* CURRENT_FH: file being reclaimed */
    ClaimPrevious(OpenDelegationType4) = 1,
    /* CURRENT_FH: directory */
    ClaimDelegateCur(OpenClaimDelegateCur4) = 2,
    /* CURRENT_FH: directory */
    ClaimDelegatePrev(Component4) = 3,
    /* NFSv4.1, CURRENT_FH: file being opened */
    ClaimFh = 4,
    /* NFSv4.1, CURRENT_FH: file being opened */
    ClaimDelegCurFh(Stateid4) = 5,
    /* NFSv4.1, CURRENT_FH: file being opened */
    ClaimDelegPrevFh = 6,
}

/*
 * OPEN: Open a file, potentially receiving an open delegation
 */
#[derive(Clone, Debug, Serialize)]
pub struct Open4args {
    pub seqid: Seqid4,
    pub share_access: u32,
    pub share_deny: u32,
    pub owner: OpenOwner4,
    pub openhow: OpenFlag4,
    pub claim: OpenClaim4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpenReadDelegation4 {
    /* Stateid for delegation */
    pub stateid: Stateid4,
    /* Pre-recalled flag for delegations obtained by reclaim */
    pub recall: bool,
    pub permissions: Nfsace4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpenWriteDelegation4 {
    /* Stateid for delegation */
    pub stateid: Stateid4,
    /* Pre-recalled flag for delegations obtained by reclaim */
    pub recall: bool,
    /* Size the client may grow the file to before flushing on close */
    pub space_limit: NfsSpaceLimit4,
    pub permissions: Nfsace4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum WhyNoDelegation4 {
    NotWanted = 0,
    Contention(bool) = 1,
    Resource(bool) = 2,
    NotSuppFtype = 3,
    WriteDelegNotSuppFtype = 4,
    NotSuppUpgrade = 5,
    NotSuppDowngrade = 6,
    Cancelled = 7,
    IsDir = 8,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum OpenDelegation4 {
    None = 0,
    Read(OpenReadDelegation4) = 1,
    Write(OpenWriteDelegation4) = 2,
    /* NFSv4.1 */
    NoneExt(WhyNoDelegation4) = 3,
}

/*
 * Result flags
 */

/* Client must confirm open */
pub const OPEN4_RESULT_CONFIRM: u32 = 0x00000002;
/* Type of file locking behavior at the server */
pub const OPEN4_RESULT_LOCKTYPE_POSIX: u32 = 0x00000004;
/* Server will preserve file if removed while open */
pub const OPEN4_RESULT_PRESERVE_UNLINKED: u32 = 0x00000008;
/* Server may use CB_NOTIFY_LOCK on locks derived from this open */
pub const OPEN4_RESULT_MAY_NOTIFY_LOCK: u32 = 0x00000020;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Open4resok {
    /* Stateid for open */
    pub stateid: Stateid4,
    /* Directory change info */
    pub cinfo: ChangeInfo4,
    /* Result flags */
    pub rflags: u32,
    /* attribute set for create */
    #[serde(deserialize_with = "read_attrs", serialize_with = "write_attrs")]
    pub attrset: Vec<FileAttr>,
    /* Info on any open delegation */
    pub delegation: OpenDelegation4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpenConfirm4args {
    /* CURRENT_FH: opened file */
    pub open_stateid: Stateid4,
    pub seqid: Seqid4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OpenDowngrade4args {
    /* CURRENT_FH: opened file */
    pub open_stateid: Stateid4,
    pub seqid: Seqid4,
    pub share_access: u32,
    pub share_deny: u32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PutFh4args {
    #[serde(with = "serde_bytes")]
    pub object: NfsFh4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Read4args {
    /* CURRENT_FH: file */
    pub stateid: Stateid4,
    pub offset: Offset4,
    pub count: Count4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Read4resok {
    pub eof: bool,
    #[serde(with = "serde_bytes")]
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Remove4args {
    /* CURRENT_FH: directory */
    pub target: Component4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Rename4args {
    /* SAVED_FH: source directory */
    pub oldname: Component4,
    /* CURRENT_FH: target directory */
    pub newname: Component4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Rename4resok {
    pub source_cinfo: ChangeInfo4,
    pub target_cinfo: ChangeInfo4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Renew4args {
    pub clientid: Clientid4,
}

#[derive(Clone, Debug, Serialize)]
pub struct SetAttr4args {
    /* CURRENT_FH: target object */
    pub stateid: Stateid4,
    pub obj_attributes: Fattr4,
}

/*
 * SETATTR4res is not a union: the bitmap follows every status.
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetAttr4res {
    pub status: NfsStat4,
    pub attrsset: Bitmap4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetClientId4args {
    pub client: NfsClientId4,
    pub callback: CbClient4,
    pub callback_ident: u32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetClientId4resok {
    pub clientid: Clientid4,
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub setclientid_confirm: Verifier4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetClientIdConfirm4args {
    pub clientid: Clientid4,
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub setclientid_confirm: Verifier4,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[repr(u32)]
pub enum StableHow4 {
    Unstable4 = 0,
    DataSync4 = 1,
    FileSync4 = 2,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Write4args {
    /* CURRENT_FH: file */
    pub stateid: Stateid4,
    pub offset: Offset4,
    pub stable: StableHow4,
    #[serde(with = "serde_bytes_ng")]
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Write4resok {
    pub count: Count4,
    pub committed: StableHow4,
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub writeverf: Verifier4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ReleaseLockowner4args {
    pub lock_owner: LockOwner4,
}

/*
 * NFSv4.1: client identity and sessions
 */
pub const EXCHGID4_FLAG_SUPP_MOVED_REFER: u32 = 0x00000001;
pub const EXCHGID4_FLAG_SUPP_MOVED_MIGR: u32 = 0x00000002;
pub const EXCHGID4_FLAG_BIND_PRINC_STATEID: u32 = 0x00000100;
pub const EXCHGID4_FLAG_USE_NON_PNFS: u32 = 0x00010000;
pub const EXCHGID4_FLAG_USE_PNFS_MDS: u32 = 0x00020000;
pub const EXCHGID4_FLAG_USE_PNFS_DS: u32 = 0x00040000;
pub const EXCHGID4_FLAG_MASK_PNFS: u32 = 0x00070000;
pub const EXCHGID4_FLAG_UPD_CONFIRMED_REC_A: u32 = 0x40000000;
pub const EXCHGID4_FLAG_CONFIRMED_R: u32 = 0x80000000;

pub const CREATE_SESSION4_FLAG_PERSIST: u32 = 0x00000001;
pub const CREATE_SESSION4_FLAG_CONN_BACK_CHAN: u32 = 0x00000002;
pub const CREATE_SESSION4_FLAG_CONN_RDMA: u32 = 0x00000004;

pub const SEQ4_STATUS_CB_PATH_DOWN: u32 = 0x00000001;
pub const SEQ4_STATUS_CB_GSS_CONTEXTS_EXPIRING: u32 = 0x00000002;
pub const SEQ4_STATUS_CB_GSS_CONTEXTS_EXPIRED: u32 = 0x00000004;
pub const SEQ4_STATUS_EXPIRED_ALL_STATE_REVOKED: u32 = 0x00000008;
pub const SEQ4_STATUS_EXPIRED_SOME_STATE_REVOKED: u32 = 0x00000010;
pub const SEQ4_STATUS_ADMIN_STATE_REVOKED: u32 = 0x00000020;
pub const SEQ4_STATUS_RECALLABLE_STATE_REVOKED: u32 = 0x00000040;
pub const SEQ4_STATUS_LEASE_MOVED: u32 = 0x00000080;
pub const SEQ4_STATUS_RESTART_RECLAIM_NEEDED: u32 = 0x00000100;
pub const SEQ4_STATUS_CB_PATH_DOWN_SESSION: u32 = 0x00000200;
pub const SEQ4_STATUS_BACKCHANNEL_FAULT: u32 = 0x00000400;
pub const SEQ4_STATUS_DEVID_CHANGED: u32 = 0x00000800;
pub const SEQ4_STATUS_DEVID_DELETED: u32 = 0x00001000;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClientOwner4 {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub co_verifier: Verifier4,
    #[serde(with = "serde_bytes_ng")]
    pub co_ownerid: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ServerOwner4 {
    pub so_minor_id: u64,
    #[serde(with = "serde_bytes_ng")]
    pub so_major_id: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NfsImplId4 {
    pub nii_domain: String,
    pub nii_name: String,
    pub nii_date: Nfstime4,
}

/*
 * Only SP4_NONE state protection is offered.
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum StateProtect4a {
    None = 0,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum StateProtect4r {
    None = 0,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExchangeId4args {
    pub eia_clientowner: ClientOwner4,
    pub eia_flags: u32,
    pub eia_state_protect: StateProtect4a,
    /* optional, at most one entry */
    pub eia_client_impl_id: Vec<NfsImplId4>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExchangeId4resok {
    pub eir_clientid: Clientid4,
    pub eir_sequenceid: Sequenceid4,
    pub eir_flags: u32,
    pub eir_state_protect: StateProtect4r,
    pub eir_server_owner: ServerOwner4,
    #[serde(with = "serde_bytes_ng")]
    pub eir_server_scope: Vec<u8>,
    pub eir_server_impl_id: Vec<NfsImplId4>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChannelAttrs4 {
    pub ca_headerpadsize: Count4,
    pub ca_maxrequestsize: Count4,
    pub ca_maxresponsesize: Count4,
    pub ca_maxresponsesize_cached: Count4,
    pub ca_maxoperations: Count4,
    pub ca_maxrequests: Count4,
    /* optional, at most one entry */
    pub ca_rdma_ird: Vec<u32>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AuthSysParms {
    pub stamp: u32,
    pub machinename: String,
    pub uid: u32,
    pub gid: u32,
    pub gids: Vec<u32>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum CallbackSecParms4 {
    AuthNone = 0,
    AuthSys(AuthSysParms) = 1,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CreateSession4args {
    pub csa_clientid: Clientid4,
    pub csa_sequence: Sequenceid4,
    pub csa_flags: u32,
    pub csa_fore_chan_attrs: ChannelAttrs4,
    pub csa_back_chan_attrs: ChannelAttrs4,
    pub csa_cb_program: u32,
    pub csa_sec_parms: Vec<CallbackSecParms4>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CreateSession4resok {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub csr_sessionid: Sessionid4,
    pub csr_sequence: Sequenceid4,
    pub csr_flags: u32,
    pub csr_fore_chan_attrs: ChannelAttrs4,
    pub csr_back_chan_attrs: ChannelAttrs4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DestroySession4args {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub dsa_sessionid: Sessionid4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DestroyClientId4args {
    pub dca_clientid: Clientid4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FreeStateid4args {
    pub fsa_stateid: Stateid4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Sequence4args {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub sa_sessionid: Sessionid4,
    pub sa_sequenceid: Sequenceid4,
    pub sa_slotid: Slotid4,
    pub sa_highest_slotid: Slotid4,
    pub sa_cachethis: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Sequence4resok {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub sr_sessionid: Sessionid4,
    pub sr_sequenceid: Sequenceid4,
    pub sr_slotid: Slotid4,
    pub sr_highest_slotid: Slotid4,
    pub sr_target_highest_slotid: Slotid4,
    pub sr_status_flags: u32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ReclaimComplete4args {
    pub rca_one_fs: bool,
}

/*
 * NFSv4.1: parallel NFS
 */
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize, FromPrimitive, ToPrimitive)]
#[repr(u32)]
pub enum LayoutType4 {
    Undef0 = 0,
    Nfsv41Files = 1,
    Osd2Objects = 2,
    BlockVolume = 3,
    /* RFC 8435 */
    FlexFiles = 4,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[repr(u32)]
pub enum LayoutIomode4 {
    Undef0 = 0,
    Read = 1,
    Rw = 2,
    Any = 3,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LayoutContent4 {
    pub loc_type: LayoutType4,
    #[serde(with = "serde_bytes_ng")]
    pub loc_body: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Layout4 {
    pub lo_offset: Offset4,
    pub lo_length: Length4,
    pub lo_iomode: LayoutIomode4,
    pub lo_content: LayoutContent4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DeviceAddr4 {
    pub da_layout_type: LayoutType4,
    #[serde(with = "serde_bytes_ng")]
    pub da_addr_body: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LayoutGet4args {
    /* CURRENT_FH: file */
    pub loga_signal_layout_avail: bool,
    pub loga_layout_type: LayoutType4,
    pub loga_iomode: LayoutIomode4,
    pub loga_offset: Offset4,
    pub loga_length: Length4,
    pub loga_minlength: Length4,
    pub loga_stateid: Stateid4,
    pub loga_maxcount: Count4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LayoutGet4resok {
    pub logr_return_on_close: bool,
    pub logr_stateid: Stateid4,
    pub logr_layout: Vec<Layout4>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GetDeviceInfo4args {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub gdia_device_id: Deviceid4,
    pub gdia_layout_type: LayoutType4,
    pub gdia_maxcount: Count4,
    pub gdia_notify_types: Bitmap4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GetDeviceInfo4resok {
    pub gdir_device_addr: DeviceAddr4,
    pub gdir_notification: Bitmap4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LayoutUpdate4 {
    pub lou_type: LayoutType4,
    #[serde(with = "serde_bytes_ng")]
    pub lou_body: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LayoutCommit4args {
    /* CURRENT_FH: file */
    pub loca_offset: Offset4,
    pub loca_length: Length4,
    pub loca_reclaim: bool,
    pub loca_stateid: Stateid4,
    /* newoffset4: switch (bool) */
    pub loca_last_write_offset: Option<Offset4>,
    /* newtime4: switch (bool) */
    pub loca_time_modify: Option<Nfstime4>,
    pub loca_layoutupdate: LayoutUpdate4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LayoutCommit4resok {
    /* newsize4: switch (bool) */
    pub locr_newsize: Option<Length4>,
}

pub const LAYOUTRETURN4_FILE: u32 = 1;
pub const LAYOUTRETURN4_FSID: u32 = 2;
pub const LAYOUTRETURN4_ALL: u32 = 3;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LayoutReturnFile4 {
    pub lrf_offset: Offset4,
    pub lrf_length: Length4,
    pub lrf_stateid: Stateid4,
    #[serde(with = "serde_bytes_ng")]
    pub lrf_body: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum LayoutReturn4 {
    Undef0 = 0,
    File(LayoutReturnFile4) = 1,
    Fsid = 2,
    All = 3,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LayoutReturn4args {
    /* CURRENT_FH: file */
    pub lora_reclaim: bool,
    pub lora_layout_type: LayoutType4,
    pub lora_iomode: LayoutIomode4,
    pub lora_layoutreturn: LayoutReturn4,
}

/*
 * NFSv4.2
 */
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Allocate4args {
    /* CURRENT_FH: file */
    pub aa_stateid: Stateid4,
    pub aa_offset: Offset4,
    pub aa_length: Length4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Deallocate4args {
    /* CURRENT_FH: file */
    pub da_stateid: Stateid4,
    pub da_offset: Offset4,
    pub da_length: Length4,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum DataContent4 {
    Data = 0,
    Hole = 1,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Seek4args {
    /* CURRENT_FH: file */
    pub sa_stateid: Stateid4,
    pub sa_offset: Offset4,
    pub sa_what: DataContent4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Seek4resok {
    pub sr_eof: bool,
    pub sr_offset: Offset4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum Netloc4 {
    Undef0 = 0,
    Name(String) = 1,
    Url(String) = 2,
    NetAddr(ClientAddr4) = 3,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Copy4args {
    /* SAVED_FH: source file */
    /* CURRENT_FH: destination file */
    pub ca_src_stateid: Stateid4,
    pub ca_dst_stateid: Stateid4,
    pub ca_src_offset: Offset4,
    pub ca_dst_offset: Offset4,
    pub ca_count: Length4,
    pub ca_consecutive: bool,
    pub ca_synchronous: bool,
    pub ca_source_server: Vec<Netloc4>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WriteResponse4 {
    /* optional, at most one entry */
    pub wr_callback_id: Vec<Stateid4>,
    pub wr_count: Length4,
    pub wr_committed: StableHow4,
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub wr_writeverf: Verifier4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CopyRequirements4 {
    pub cr_consecutive: bool,
    pub cr_synchronous: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Copy4resok {
    pub cr_response: WriteResponse4,
    pub cr_requirements: CopyRequirements4,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DeviceError4 {
    #[serde(with = "serde_xdr::opaque_data::fixed_length")]
    pub de_deviceid: Deviceid4,
    pub de_status: NfsStat4,
    pub de_opnum: u32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LayoutError4args {
    /* CURRENT_FH: file */
    pub lea_offset: Offset4,
    pub lea_length: Length4,
    pub lea_stateid: Stateid4,
    pub lea_errors: Vec<DeviceError4>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GetXattr4args {
    /* CURRENT_FH: file */
    pub gxa_name: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GetXattr4resok {
    #[serde(with = "serde_bytes_ng")]
    pub gxr_value: Vec<u8>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum SetXattrOption4 {
    Either = 0,
    Create = 1,
    Replace = 2,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetXattr4args {
    /* CURRENT_FH: file */
    pub sxa_option: SetXattrOption4,
    pub sxa_key: String,
    #[serde(with = "serde_bytes_ng")]
    pub sxa_value: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RemoveXattr4args {
    /* CURRENT_FH: file */
    pub rxa_name: String,
}

/*
 * Operation numbers used outside the compound arrays.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq, ToPrimitive)]
#[repr(u32)]
pub enum NfsOpNum4 {
    OpCommit = 5,
    OpRead = 25,
    OpWrite = 38,
    OpLayoutget = 50,
    OpSequence = 53,
    OpLayouterror = 64,
    OpReadPlus = 68,
}

/*
 * Operation arrays. Variant index equals the operation number; unit
 * variants are operations this client never issues.
 */
#[derive(Clone, Debug, Serialize)]
#[repr(u32)]
pub enum NfsArgOp {
    OpUndef0 = 0,
    OpUndef1 = 1,
    OpUndef2 = 2,
    OpAccess(Access4args) = 3,
    Opclose(Close4args) = 4,
    Opcommit(Commit4args) = 5,
    Opcreate(Create4args) = 6,
    Opdelegpurge(DelegPurge4args) = 7,
    Opdelegreturn(DelegReturn4args) = 8,
    Opgetattr(Getattr4args) = 9,
    Opgetfh(()) = 10,
    Oplink(Link4args) = 11,
    Oplock(Lock4args) = 12,
    Oplockt(Lockt4args) = 13,
    Oplocku(Locku4args) = 14,
    Oplookup(Lookup4args) = 15,
    Oplookupp(()) = 16,
    Opnverify = 17,
    Opopen(Open4args) = 18,
    Opopenattr = 19,
    OpopenConfirm(OpenConfirm4args) = 20,
    OpopenDowngrade(OpenDowngrade4args) = 21,
    Opputfh(PutFh4args) = 22,
    Opputpubfh(()) = 23,
    Opputrootfh(()) = 24,
    Opread(Read4args) = 25,
    Opreaddir = 26,
    Opreadlink = 27,
    Opremove(Remove4args) = 28,
    Oprename(Rename4args) = 29,
    Oprenew(Renew4args) = 30,
    Oprestorefh(()) = 31,
    Opsavefh(()) = 32,
    OpSecinfo = 33,
    Opsetattr(SetAttr4args) = 34,
    Opsetclientid(SetClientId4args) = 35,
    OpsetclientidConfirm(SetClientIdConfirm4args) = 36,
    Opverify = 37,
    Opwrite(Write4args) = 38,
    OpreleaseLockOwner(ReleaseLockowner4args) = 39,
    /* NFSv4.1 */
    Opbackchannelctl = 40,
    Opbindconntosession = 41,
    Opexchangeid(ExchangeId4args) = 42,
    Opcreatesession(CreateSession4args) = 43,
    Opdestroysession(DestroySession4args) = 44,
    Opfreestateid(FreeStateid4args) = 45,
    Opgetdirdelegation = 46,
    Opgetdeviceinfo(GetDeviceInfo4args) = 47,
    Opgetdevicelist = 48,
    Oplayoutcommit(LayoutCommit4args) = 49,
    Oplayoutget(LayoutGet4args) = 50,
    Oplayoutreturn(LayoutReturn4args) = 51,
    Opsecinfononame = 52,
    Opsequence(Sequence4args) = 53,
    Opsetssv = 54,
    Opteststateid = 55,
    Opwantdelegation = 56,
    Opdestroyclientid(DestroyClientId4args) = 57,
    Opreclaimcomplete(ReclaimComplete4args) = 58,
    /* NFSv4.2 */
    Opallocate(Allocate4args) = 59,
    Opcopy(Copy4args) = 60,
    Opcopynotify = 61,
    Opdeallocate(Deallocate4args) = 62,
    Opioadvise = 63,
    Oplayouterror(LayoutError4args) = 64,
    Oplayoutstats = 65,
    Opoffloadcancel = 66,
    Opoffloadstatus = 67,
    Opreadplus = 68,
    Opseek(Seek4args) = 69,
    Opwritesame = 70,
    Opclone = 71,
    Opgetxattr(GetXattr4args) = 72,
    Opsetxattr(SetXattr4args) = 73,
    Oplistxattrs = 74,
    Opremovexattr(RemoveXattr4args) = 75,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[repr(u32)]
pub enum NfsResOp4 {
    OpUndef0 = 0,
    OpUndef1 = 1,
    OpUndef2 = 2,
    OpAccess(NfsResult<Access4resok>) = 3,
    Opclose(NfsResult<Stateid4>) = 4,
    Opcommit(NfsResult<Commit4resok>) = 5,
    Opcreate(NfsResult<Create4resok>) = 6,
    Opdelegpurge(NfsStat4) = 7,
    Opdelegreturn(NfsStat4) = 8,
    Opgetattr(NfsResult<Getattr4resok>) = 9,
    Opgetfh(NfsResult<GetFh4resok>) = 10,
    Oplink(NfsResult<Link4resok>) = 11,
    Oplock(Lock4res) = 12,
    Oplockt(Lockt4res) = 13,
    Oplocku(NfsResult<Stateid4>) = 14,
    Oplookup(NfsStat4) = 15,
    Oplookupp(NfsStat4) = 16,
    Opnverify(NfsStat4) = 17,
    Opopen(NfsResult<Open4resok>) = 18,
    Opopenattr(NfsStat4) = 19,
    OpopenConfirm(NfsResult<Stateid4>) = 20,
    OpopenDowngrade(NfsResult<Stateid4>) = 21,
    Opputfh(NfsStat4) = 22,
    Opputpubfh(NfsStat4) = 23,
    Opputrootfh(NfsStat4) = 24,
    Opread(NfsResult<Read4resok>) = 25,
    Opreaddir = 26,
    Opreadlink = 27,
    Opremove(NfsResult<ChangeInfo4>) = 28,
    Oprename(NfsResult<Rename4resok>) = 29,
    Oprenew(NfsStat4) = 30,
    Oprestorefh(NfsStat4) = 31,
    Opsavefh(NfsStat4) = 32,
    OpSecinfo = 33,
    Opsetattr(SetAttr4res) = 34,
    Opsetclientid(NfsResult<SetClientId4resok>) = 35,
    OpsetclientidConfirm(NfsStat4) = 36,
    Opverify(NfsStat4) = 37,
    Opwrite(NfsResult<Write4resok>) = 38,
    OpreleaseLockOwner(NfsStat4) = 39,
    /* NFSv4.1 */
    Opbackchannelctl = 40,
    Opbindconntosession = 41,
    Opexchangeid(NfsResult<ExchangeId4resok>) = 42,
    Opcreatesession(NfsResult<CreateSession4resok>) = 43,
    Opdestroysession(NfsStat4) = 44,
    Opfreestateid(NfsStat4) = 45,
    Opgetdirdelegation = 46,
    Opgetdeviceinfo(NfsResult<GetDeviceInfo4resok>) = 47,
    Opgetdevicelist = 48,
    Oplayoutcommit(NfsResult<LayoutCommit4resok>) = 49,
    Oplayoutget(NfsResult<LayoutGet4resok>) = 50,
    Oplayoutreturn(NfsResult<Option<Stateid4>>) = 51,
    Opsecinfononame = 52,
    Opsequence(NfsResult<Sequence4resok>) = 53,
    Opsetssv = 54,
    Opteststateid = 55,
    Opwantdelegation = 56,
    Opdestroyclientid(NfsStat4) = 57,
    Opreclaimcomplete(NfsStat4) = 58,
    /* NFSv4.2 */
    Opallocate(NfsStat4) = 59,
    Opcopy(NfsResult<Copy4resok>) = 60,
    Opcopynotify = 61,
    Opdeallocate(NfsStat4) = 62,
    Opioadvise = 63,
    Oplayouterror(NfsStat4) = 64,
    Oplayoutstats = 65,
    Opoffloadcancel = 66,
    Opoffloadstatus = 67,
    Opreadplus = 68,
    Opseek(NfsResult<Seek4resok>) = 69,
    Opwritesame = 70,
    Opclone = 71,
    Opgetxattr(NfsResult<GetXattr4resok>) = 72,
    Opsetxattr(NfsResult<ChangeInfo4>) = 73,
    Oplistxattrs = 74,
    Opremovexattr(NfsResult<ChangeInfo4>) = 75,
}

#[derive(Clone, Debug, Serialize)]
pub struct Compound4args {
    pub tag: String,
    pub minor_version: u32,
    pub argarray: Vec<NfsArgOp>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Compound4res {
    pub status: NfsStat4,
    pub tag: String,
    pub resarray: Vec<NfsResOp4>,
}

/*
 * Remote file service routines

program NFS4_PROGRAM {
        version NFS_V4 {
                void
                        NFSPROC4_NULL(void) = 0;

                Compound4res
                        NFSPROC4_COMPOUND(Compound4args) = 1;

        } = 4;
} = 100003;
 */
