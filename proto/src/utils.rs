use std::fmt;
use std::io::Cursor;

use num_traits::{FromPrimitive, ToPrimitive};
use serde::{
    de::{self, DeserializeOwned, SeqAccess, Visitor},
    ser::{SerializeSeq, SerializeStruct},
    Deserialize, Serialize, Serializer,
};
use serde_xdr::{from_reader, to_writer, CompatDeserializationError};

use super::nfs4_proto::{
    Fattr4, FileAttr, FileAttrValue, Fsid4, LayoutType4, Lock4denied, Lock4res, Lock4resok,
    Lockt4res, NfsFtype4, NfsResult, NfsStat4, Nfstime4,
};

pub fn from_bytes<T: DeserializeOwned>(buffer: &[u8]) -> Result<T, anyhow::Error> {
    let mut cursor = Cursor::new(buffer);
    let result: Result<T, CompatDeserializationError> = from_reader(&mut cursor);
    match result {
        Ok(msg) => Ok(msg),
        Err(e) => Err(anyhow::anyhow!("Error deserializing message: {:?}", e)),
    }
}

pub fn to_bytes<T: Serialize>(message: &T) -> Result<Vec<u8>, anyhow::Error> {
    let mut bytes = Vec::new();
    let result = to_writer(&mut bytes, message);
    match result {
        Ok(()) => Ok(bytes),
        Err(e) => Err(anyhow::anyhow!("Error serializing message: {:?}", e)),
    }
}

pub fn file_attrs_to_bitmap(file_attrs: &[FileAttr]) -> Vec<u32> {
    let mut attrs: Vec<u32> = Vec::new();
    for attr in file_attrs {
        // every FileAttr carries its attribute number as discriminant
        let idx = *attr as u32;
        let word = (idx / 32) as usize;
        if attrs.len() <= word {
            attrs.resize(word + 1, 0);
        }
        attrs[word] |= 1 << (idx % 32);
    }
    attrs
}

pub fn bitmap_to_file_attrs(bitmap: &[u32]) -> Result<Vec<FileAttr>, anyhow::Error> {
    let mut attrs: Vec<FileAttr> = Vec::new();
    for (idx, segment) in bitmap.iter().enumerate() {
        for n in 0..32 {
            if (segment >> n) & 1 == 1 {
                let num = (idx * 32 + n) as u32;
                match FromPrimitive::from_u32(num) {
                    Some(attr) => attrs.push(attr),
                    None => return Err(anyhow::anyhow!("attribute {} is not decodable", num)),
                }
            }
        }
    }
    Ok(attrs)
}

/// Bitmaps that only report which attributes were set: unknown bits are dropped.
pub fn read_attrs<'de, D>(deserializer: D) -> Result<Vec<FileAttr>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let attrs_raw = <Vec<u32> as serde::Deserialize>::deserialize(deserializer)?;
    let mut attrs: Vec<FileAttr> = Vec::new();
    for (idx, segment) in attrs_raw.iter().enumerate() {
        for n in 0..32 {
            if (segment >> n) & 1 == 1 {
                if let Some(attr) = FromPrimitive::from_u32((idx * 32 + n) as u32) {
                    attrs.push(attr);
                }
            }
        }
    }
    Ok(attrs)
}

pub fn write_attrs<S>(v: &[FileAttr], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let attrs = file_attrs_to_bitmap(v);
    let mut seq = serializer.serialize_seq(Some(attrs.len()))?;
    for attr in attrs {
        seq.serialize_element(&attr)?;
    }
    seq.end()
}

fn put_string(buffer: &mut Vec<u8>, v: &str) {
    buffer.extend_from_slice((v.len() as u32).to_be_bytes().as_ref());
    buffer.extend_from_slice(v.as_bytes());
    let pad = (4 - v.len() % 4) % 4;
    buffer.extend(std::iter::repeat(0u8).take(pad));
}

fn put_time(buffer: &mut Vec<u8>, v: &Nfstime4) {
    buffer.extend_from_slice(v.seconds.to_be_bytes().as_ref());
    buffer.extend_from_slice(v.nseconds.to_be_bytes().as_ref());
}

pub fn encode_attr_values(attr_values: &[FileAttrValue]) -> Vec<u8> {
    let mut buffer: Vec<u8> = Vec::new();
    for val in attr_values {
        match val {
            FileAttrValue::SupportedAttrs(v) => {
                let attrs = file_attrs_to_bitmap(v);
                buffer.extend_from_slice((attrs.len() as u32).to_be_bytes().as_ref());
                attrs.iter().for_each(|attr| {
                    buffer.extend_from_slice(attr.to_be_bytes().as_ref());
                });
            }
            FileAttrValue::Type(v) => {
                buffer.extend_from_slice((*v as u32).to_be_bytes().as_ref());
            }
            FileAttrValue::FhExpireType(v)
            | FileAttrValue::LeaseTime(v)
            | FileAttrValue::Mode(v)
            | FileAttrValue::Numlinks(v)
            | FileAttrValue::LayoutBlksize(v) => {
                buffer.extend_from_slice(v.to_be_bytes().as_ref());
            }
            FileAttrValue::Change(v)
            | FileAttrValue::Size(v)
            | FileAttrValue::Fileid(v)
            | FileAttrValue::Maxread(v)
            | FileAttrValue::Maxwrite(v)
            | FileAttrValue::SpaceUsed(v)
            | FileAttrValue::MountedOnFileid(v) => {
                buffer.extend_from_slice(v.to_be_bytes().as_ref());
            }
            FileAttrValue::LinkSupport(v)
            | FileAttrValue::SymlinkSupport(v)
            | FileAttrValue::NamedAttr(v)
            | FileAttrValue::UniqueHandles(v) => {
                buffer.extend_from_slice((*v as u32).to_be_bytes().as_ref());
            }
            FileAttrValue::Fsid(v) => {
                buffer.extend_from_slice(v.major.to_be_bytes().as_ref());
                buffer.extend_from_slice(v.minor.to_be_bytes().as_ref());
            }
            FileAttrValue::RdattrError(v) => {
                buffer.extend_from_slice((*v as u32).to_be_bytes().as_ref());
            }
            FileAttrValue::Owner(v) | FileAttrValue::OwnerGroup(v) => put_string(&mut buffer, v),
            FileAttrValue::TimeAccess(v)
            | FileAttrValue::TimeMetadata(v)
            | FileAttrValue::TimeModify(v) => put_time(&mut buffer, v),
            FileAttrValue::FsLayoutTypes(v) => {
                buffer.extend_from_slice((v.len() as u32).to_be_bytes().as_ref());
                v.iter().for_each(|t| {
                    buffer.extend_from_slice((*t as u32).to_be_bytes().as_ref());
                });
            }
        }
    }
    buffer
}

// cursor over the packed attribute values of a fattr4
struct AttrReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> AttrReader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], anyhow::Error> {
        if self.pos + n > self.buf.len() {
            return Err(anyhow::anyhow!("attribute values truncated"));
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn u32(&mut self) -> Result<u32, anyhow::Error> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn u64(&mut self) -> Result<u64, anyhow::Error> {
        let hi = self.u32()? as u64;
        let lo = self.u32()? as u64;
        Ok((hi << 32) | lo)
    }

    fn bool(&mut self) -> Result<bool, anyhow::Error> {
        Ok(self.u32()? != 0)
    }

    fn string(&mut self) -> Result<String, anyhow::Error> {
        let len = self.u32()? as usize;
        let bytes = self.take(len)?.to_vec();
        self.take((4 - len % 4) % 4)?;
        Ok(String::from_utf8(bytes)?)
    }

    fn time(&mut self) -> Result<Nfstime4, anyhow::Error> {
        let seconds = self.u64()? as i64;
        let nseconds = self.u32()?;
        Ok(Nfstime4 { seconds, nseconds })
    }
}

pub fn decode_attr_values(
    attrmask: &[FileAttr],
    values: &[u8],
) -> Result<Vec<FileAttrValue>, anyhow::Error> {
    let mut reader = AttrReader {
        buf: values,
        pos: 0,
    };
    let mut attr_vals = Vec::with_capacity(attrmask.len());
    for attr in attrmask {
        let value = match attr {
            FileAttr::SupportedAttrs => {
                let len = reader.u32()? as usize;
                let mut bitmap = Vec::with_capacity(len);
                for _ in 0..len {
                    bitmap.push(reader.u32()?);
                }
                // unknown supported bits are not an error here
                let mut supported = Vec::new();
                for (idx, segment) in bitmap.iter().enumerate() {
                    for n in 0..32 {
                        if (segment >> n) & 1 == 1 {
                            if let Some(a) = FromPrimitive::from_u32((idx * 32 + n) as u32) {
                                supported.push(a);
                            }
                        }
                    }
                }
                FileAttrValue::SupportedAttrs(supported)
            }
            FileAttr::Type => {
                let raw = reader.u32()?;
                let ftype: NfsFtype4 = FromPrimitive::from_u32(raw)
                    .ok_or_else(|| anyhow::anyhow!("bad file type {}", raw))?;
                FileAttrValue::Type(ftype)
            }
            FileAttr::FhExpireType => FileAttrValue::FhExpireType(reader.u32()?),
            FileAttr::Change => FileAttrValue::Change(reader.u64()?),
            FileAttr::Size => FileAttrValue::Size(reader.u64()?),
            FileAttr::LinkSupport => FileAttrValue::LinkSupport(reader.bool()?),
            FileAttr::SymlinkSupport => FileAttrValue::SymlinkSupport(reader.bool()?),
            FileAttr::NamedAttr => FileAttrValue::NamedAttr(reader.bool()?),
            FileAttr::Fsid => FileAttrValue::Fsid(Fsid4 {
                major: reader.u64()?,
                minor: reader.u64()?,
            }),
            FileAttr::UniqueHandles => FileAttrValue::UniqueHandles(reader.bool()?),
            FileAttr::LeaseTime => FileAttrValue::LeaseTime(reader.u32()?),
            FileAttr::RdattrError => {
                let raw = reader.u32()?;
                let stat: NfsStat4 = FromPrimitive::from_u32(raw)
                    .ok_or_else(|| anyhow::anyhow!("bad status {}", raw))?;
                FileAttrValue::RdattrError(stat)
            }
            FileAttr::Fileid => FileAttrValue::Fileid(reader.u64()?),
            FileAttr::Maxread => FileAttrValue::Maxread(reader.u64()?),
            FileAttr::Maxwrite => FileAttrValue::Maxwrite(reader.u64()?),
            FileAttr::Mode => FileAttrValue::Mode(reader.u32()?),
            FileAttr::Numlinks => FileAttrValue::Numlinks(reader.u32()?),
            FileAttr::Owner => FileAttrValue::Owner(reader.string()?),
            FileAttr::OwnerGroup => FileAttrValue::OwnerGroup(reader.string()?),
            FileAttr::SpaceUsed => FileAttrValue::SpaceUsed(reader.u64()?),
            FileAttr::TimeAccess => FileAttrValue::TimeAccess(reader.time()?),
            FileAttr::TimeMetadata => FileAttrValue::TimeMetadata(reader.time()?),
            FileAttr::TimeModify => FileAttrValue::TimeModify(reader.time()?),
            FileAttr::MountedOnFileid => FileAttrValue::MountedOnFileid(reader.u64()?),
            FileAttr::FsLayoutTypes => {
                let len = reader.u32()? as usize;
                let mut types = Vec::with_capacity(len);
                for _ in 0..len {
                    let raw = reader.u32()?;
                    // layout types this client has never heard of are skipped
                    if let Some(t) = LayoutType4::from_u32(raw) {
                        types.push(t);
                    }
                }
                FileAttrValue::FsLayoutTypes(types)
            }
            FileAttr::LayoutBlksize => FileAttrValue::LayoutBlksize(reader.u32()?),
        };
        attr_vals.push(value);
    }
    Ok(attr_vals)
}

// deserialization helper for Fattr4
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FattrRaw {
    attrmask: Vec<u32>,
    #[serde(with = "serde_bytes_ng")]
    attr_vals: Vec<u8>,
}

impl Serialize for Fattr4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = FattrRaw {
            attrmask: file_attrs_to_bitmap(&self.attrmask),
            attr_vals: encode_attr_values(&self.attr_vals),
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fattr4 {
    fn deserialize<D>(deserializer: D) -> Result<Fattr4, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fattr_raw = <FattrRaw as serde::Deserialize>::deserialize(deserializer)?;
        let attrmask = bitmap_to_file_attrs(&fattr_raw.attrmask).map_err(de::Error::custom)?;
        let attr_vals =
            decode_attr_values(&attrmask, &fattr_raw.attr_vals).map_err(de::Error::custom)?;
        Ok(Fattr4 {
            attrmask,
            attr_vals,
        })
    }
}

impl Serialize for NfsStat4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match ToPrimitive::to_u32(self) {
            Some(v) => v.serialize(serializer),
            None => Err(serde::ser::Error::custom("status out of range")),
        }
    }
}

impl<'de> Deserialize<'de> for NfsStat4 {
    fn deserialize<D>(deserializer: D) -> Result<NfsStat4, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <u32 as serde::Deserialize>::deserialize(deserializer)?;
        FromPrimitive::from_u32(raw)
            .ok_or_else(|| de::Error::custom(format!("unknown nfsstat4 {}", raw)))
    }
}

impl<T: Serialize> Serialize for NfsResult<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            NfsResult::Ok(resok) => {
                let mut seq = serializer.serialize_struct("NfsResult", 2)?;
                seq.serialize_field("status", &NfsStat4::Nfs4Ok)?;
                seq.serialize_field("resok", resok)?;
                seq.end()
            }
            NfsResult::Err(status) => {
                let mut seq = serializer.serialize_struct("NfsResult", 1)?;
                seq.serialize_field("status", status)?;
                seq.end()
            }
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NfsResult<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct NfsResultVisitor<T>(std::marker::PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for NfsResultVisitor<T> {
            type Value = NfsResult<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("status-switched result")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<NfsResult<T>, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let status: NfsStat4 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if status != NfsStat4::Nfs4Ok {
                    return Ok(NfsResult::Err(status));
                }
                let resok: T = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(NfsResult::Ok(resok))
            }
        }

        const FIELDS: &[&str] = &["status", "resok"];
        deserializer.deserialize_struct(
            "NfsResult",
            FIELDS,
            NfsResultVisitor(std::marker::PhantomData),
        )
    }
}

impl Serialize for Lock4res {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Lock4res::Ok(resok) => {
                let mut seq = serializer.serialize_struct("Lock4res", 2)?;
                seq.serialize_field("status", &NfsStat4::Nfs4Ok)?;
                seq.serialize_field("resok4", resok)?;
                seq.end()
            }
            Lock4res::Denied(denied) => {
                let mut seq = serializer.serialize_struct("Lock4res", 2)?;
                seq.serialize_field("status", &NfsStat4::Nfs4errDenied)?;
                seq.serialize_field("denied", denied)?;
                seq.end()
            }
            Lock4res::Err(status) => {
                let mut seq = serializer.serialize_struct("Lock4res", 1)?;
                seq.serialize_field("status", status)?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Lock4res {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Lock4resVisitor;

        impl<'de> Visitor<'de> for Lock4resVisitor {
            type Value = Lock4res;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("LOCK4res")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Lock4res, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let status: NfsStat4 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                match status {
                    NfsStat4::Nfs4Ok => {
                        let resok: Lock4resok = seq
                            .next_element()?
                            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                        Ok(Lock4res::Ok(resok))
                    }
                    NfsStat4::Nfs4errDenied => {
                        let denied: Lock4denied = seq
                            .next_element()?
                            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                        Ok(Lock4res::Denied(denied))
                    }
                    status => Ok(Lock4res::Err(status)),
                }
            }
        }

        const FIELDS: &[&str] = &["status", "body"];
        deserializer.deserialize_struct("Lock4res", FIELDS, Lock4resVisitor)
    }
}

impl Serialize for Lockt4res {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Lockt4res::Denied(denied) => {
                let mut seq = serializer.serialize_struct("Lockt4res", 2)?;
                seq.serialize_field("status", &NfsStat4::Nfs4errDenied)?;
                seq.serialize_field("denied", denied)?;
                seq.end()
            }
            Lockt4res::Ok => {
                let mut seq = serializer.serialize_struct("Lockt4res", 1)?;
                seq.serialize_field("status", &NfsStat4::Nfs4Ok)?;
                seq.end()
            }
            Lockt4res::Err(status) => {
                let mut seq = serializer.serialize_struct("Lockt4res", 1)?;
                seq.serialize_field("status", status)?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Lockt4res {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Lockt4resVisitor;

        impl<'de> Visitor<'de> for Lockt4resVisitor {
            type Value = Lockt4res;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("LOCKT4res")
            }

            fn visit_seq<V>(self, mut seq: V) -> Result<Lockt4res, V::Error>
            where
                V: SeqAccess<'de>,
            {
                let status: NfsStat4 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                match status {
                    NfsStat4::Nfs4Ok => Ok(Lockt4res::Ok),
                    NfsStat4::Nfs4errDenied => {
                        let denied: Lock4denied = seq
                            .next_element()?
                            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                        Ok(Lockt4res::Denied(denied))
                    }
                    status => Ok(Lockt4res::Err(status)),
                }
            }
        }

        const FIELDS: &[&str] = &["status", "denied"];
        deserializer.deserialize_struct("Lockt4res", FIELDS, Lockt4resVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfs4_proto::{Getattr4resok, Stateid4};

    #[test]
    fn test_bitmap_spans_words() {
        let bitmap = file_attrs_to_bitmap(&[
            FileAttr::Type,
            FileAttr::Size,
            FileAttr::LeaseTime,
            FileAttr::Mode,
            FileAttr::FsLayoutTypes,
        ]);
        assert_eq!(bitmap.len(), 2);
        assert_eq!(bitmap[0], (1 << 1) | (1 << 4) | (1 << 10));
        assert_eq!(bitmap[1], (1 << (33 - 32)) | (1 << (62 - 32)));

        let attrs = bitmap_to_file_attrs(&bitmap).unwrap();
        assert_eq!(attrs.len(), 5);
        assert_eq!(attrs[4], FileAttr::FsLayoutTypes);
    }

    #[test]
    fn test_unknown_attr_is_rejected() {
        // bit 12 (acl) has no decoder
        assert!(bitmap_to_file_attrs(&[1 << 12]).is_err());
    }

    #[test]
    fn test_getattr_values_decode_in_bit_order() {
        let resok = Getattr4resok {
            obj_attributes: Fattr4 {
                attrmask: vec![FileAttr::Size, FileAttr::LeaseTime, FileAttr::Owner],
                attr_vals: vec![
                    FileAttrValue::Size(4096),
                    FileAttrValue::LeaseTime(90),
                    FileAttrValue::Owner("nobody".to_string()),
                ],
            },
        };
        let res = NfsResult::Ok(resok.clone());
        let bytes = to_bytes(&res).unwrap();
        let decoded: NfsResult<Getattr4resok> = from_bytes(&bytes).unwrap();
        assert_eq!(decoded, NfsResult::Ok(resok));
    }

    #[test]
    fn test_failed_result_has_no_body() {
        let bytes = to_bytes(&NfsResult::<Stateid4>::Err(NfsStat4::Nfs4errGrace)).unwrap();
        assert_eq!(bytes, 10013u32.to_be_bytes().to_vec());
        let decoded: NfsResult<Stateid4> = from_bytes(&bytes).unwrap();
        assert_eq!(decoded, NfsResult::Err(NfsStat4::Nfs4errGrace));
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let bytes = 4242u32.to_be_bytes();
        assert!(from_bytes::<NfsStat4>(&bytes).is_err());
    }
}
