//! Helpers shared by the Sonarr provider handlers.
//!
//! - [`codec`]: the provider-item field codec
//! - [`import_id`]: import identifier parsing
//! - [`convert`]: state and record conversions
//! - [`redact`]: credential redaction for log output

pub mod codec;
pub mod convert;
pub mod import_id;
pub mod redact;

pub use codec::{CodecError, FieldKind, FieldSpec, MASKED_SENTINEL, decode_fields, encode_fields};
pub use convert::{attributes_hash, overlay_record, record_map, scalar_to_string};
pub use import_id::{ImportIdError, parse_import_id};
pub use redact::redact_sensitive;
