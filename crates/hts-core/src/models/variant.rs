//! Report variant detection constants and the variant-keyed rename map.

use serde::{Deserialize, Serialize};

/// Descriptor text identifying a call-first report.
pub const CALL_FIRST_DESCRIPTOR: &str =
    "İletişimin Tespiti (Arama - Aranma - Mesaj Atma - Mesaj Alma)";

/// Descriptor text identifying a received-first report.
pub const RECEIVED_FIRST_DESCRIPTOR: &str =
    "İletişimin Tespiti (Aranma - Arama - Mesaj Alma - Mesaj Atma)";

/// Column renames applied to received-first reports, old name to new name.
///
/// Only columns actually present in the table are renamed; absent entries
/// are skipped without error. The odd spacing inside the keys is verbatim
/// from the source report headers.
pub const RECEIVED_FIRST_RENAMES: &[(&str, &str)] = &[
    ("İsim Soyisim (  Numara)", "İsim Soyisim ( Diğer Numara)"),
    ("TC Kimlik No ( Numara)", "TC Kimlik No (Diğer Numara)"),
    ("IMEI", "IMEIL(Diğer Numara)"),
    ("BAZ (Numara)", "BAZ (Diğer Numara)"),
];

/// The two mutually exclusive report layouts.
///
/// Determines column orientation: in a received-first report the raw
/// "NUMARA" field denotes the other party, so the normalizer swaps it with
/// "DİĞER NUMARA" to keep "NUMARA" always meaning the queried subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentVariant {
    /// Outgoing calls reported first; columns keep their raw orientation.
    CallFirst,
    /// Incoming calls reported first; number columns are swapped and
    /// counterpart columns renamed.
    ReceivedFirst,
}

impl DocumentVariant {
    /// Map a descriptor cell to a variant. Exact match only.
    pub fn from_descriptor(text: &str) -> Option<Self> {
        match text {
            CALL_FIRST_DESCRIPTOR => Some(DocumentVariant::CallFirst),
            RECEIVED_FIRST_DESCRIPTOR => Some(DocumentVariant::ReceivedFirst),
            _ => None,
        }
    }
}
