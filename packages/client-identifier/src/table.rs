//! Azureus style client codes.
//!
//! Adding a client is adding one line to [`CLIENTS`].
use crate::version::Style;

/// One registered client code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code: [u8; 2],
    pub name: &'static str,
    pub style: Style,
}

const fn entry(code: &[u8; 2], name: &'static str, style: Style) -> Entry {
    Entry {
        code: *code,
        name,
        style,
    }
}

/// Known clients, sorted by code.
pub const CLIENTS: &[Entry] = &[
    entry(b"7T", "aTorrent", Style::ThreeDigits),
    entry(b"AG", "Ares", Style::ThreeDigits),
    entry(b"AR", "Arctic Torrent", Style::NoVersion),
    entry(b"AT", "Artemis", Style::ThreeDigits),
    entry(b"AV", "Avicora", Style::NoVersion),
    entry(b"AX", "BitPump", Style::TwoMajorTwoMinor),
    entry(b"AZ", "Vuze", Style::FourDigits),
    entry(b"A~", "Ares", Style::ThreeDigits),
    entry(b"BC", "BitComet", Style::SkipFirstOneMajorTwoMinor),
    entry(b"BF", "BitFlu", Style::NoVersion),
    entry(b"BG", "BTG", Style::FourDigits),
    entry(b"BI", "BiglyBT", Style::FourDigits),
    entry(b"BS", "BTSlave", Style::NoVersion),
    entry(b"BW", "BitWombat", Style::NoVersion),
    entry(b"BX", "BittorrentX", Style::NoVersion),
    entry(b"CD", "Enhanced CTorrent", Style::TwoMajorTwoMinor),
    entry(b"DE", "Deluge", Style::Deluge),
    entry(b"DP", "Propagate Data Client", Style::NoVersion),
    entry(b"EB", "EBit", Style::NoVersion),
    entry(b"ES", "Electric Sheep", Style::ThreeDigits),
    entry(b"FC", "FileCroc", Style::NoVersion),
    entry(b"FG", "FlashGet", Style::SkipFirstOneMajorTwoMinor),
    entry(b"FX", "Freebox BitTorrent", Style::NoVersion),
    entry(b"HL", "Halite", Style::ThreeDigits),
    entry(b"HN", "Hydranode", Style::NoVersion),
    entry(b"KG", "KGet", Style::NoVersion),
    entry(b"KT", "KTorrent", Style::ThreeDigits),
    entry(b"LC", "LeechCraft", Style::NoVersion),
    entry(b"LH", "LH-ABC", Style::NoVersion),
    entry(b"LK", "linkage", Style::ThreeDigits),
    entry(b"LP", "Lphant", Style::TwoMajorTwoMinor),
    entry(b"LT", "libtorrent (Rasterbar)", Style::ThreeAlphanumeric),
    entry(b"LW", "LimeWire", Style::NoVersion),
    entry(b"MO", "MonoTorrent", Style::NoVersion),
    entry(b"MP", "MooPolice", Style::ThreeDigits),
    entry(b"MR", "Miro", Style::NoVersion),
    entry(b"MT", "MoonlightTorrent", Style::NoVersion),
    entry(b"NE", "BT Next Evolution", Style::ThreeDigits),
    entry(b"NX", "Net Transport", Style::NoVersion),
    entry(b"OS", "OneSwarm", Style::FourDigits),
    entry(b"OT", "OmegaTorrent", Style::NoVersion),
    entry(b"PD", "Pando", Style::NoVersion),
    entry(b"PE", "PeerProject", Style::NoVersion),
    entry(b"PT", "Popcorn Time", Style::NoVersion),
    entry(b"QD", "qqdownload", Style::ThreeDigits),
    entry(b"RT", "Retriever", Style::NoVersion),
    entry(b"RZ", "RezTorrent", Style::NoVersion),
    entry(b"SB", "SwiftBit", Style::NoVersion),
    entry(b"SD", "Xunlei", Style::NoVersion),
    entry(b"SG", "GS Torrent", Style::FourDigits),
    entry(b"SN", "ShareNET", Style::NoVersion),
    entry(b"SP", "BitSpirit", Style::ThreeDigits),
    entry(b"SS", "SwarmScope", Style::NoVersion),
    entry(b"ST", "SymTorrent", Style::NoVersion),
    entry(b"SZ", "Shareaza", Style::NoVersion),
    entry(b"S~", "Shareaza", Style::NoVersion),
    entry(b"TN", "Torrent.NET", Style::NoVersion),
    entry(b"TR", "Transmission", Style::Transmission),
    entry(b"TS", "TorrentStorm", Style::NoVersion),
    entry(b"TT", "TuoTu", Style::ThreeDigits),
    entry(b"UE", "\u{b5}Torrent Embedded", Style::ThreeDigitsPlusMnemonic),
    entry(b"UL", "uLeecher!", Style::NoVersion),
    entry(b"UM", "\u{b5}Torrent Mac", Style::ThreeDigitsPlusMnemonic),
    entry(b"UT", "\u{b5}Torrent", Style::ThreeDigitsPlusMnemonic),
    entry(b"UW", "\u{b5}Torrent Web", Style::ThreeDigitsPlusMnemonic),
    entry(b"VG", "Vagaa", Style::FourDigits),
    entry(b"WD", "WebTorrent Desktop", Style::WebTorrent),
    entry(b"WT", "Bitlet", Style::NoVersion),
    entry(b"WW", "WebTorrent", Style::WebTorrent),
    entry(b"WY", "FireTorrent", Style::NoVersion),
    entry(b"XF", "Xfplay", Style::Transmission),
    entry(b"XL", "Xunlei", Style::NoVersion),
    entry(b"XT", "XanTorrent", Style::NoVersion),
    entry(b"XX", "XTorrent", Style::NoVersion),
    entry(b"ZO", "Zona", Style::FourDigits),
    entry(b"ZT", "ZipTorrent", Style::NoVersion),
    entry(b"bk", "BitKitten (libtorrent)", Style::NoVersion),
    entry(b"lt", "libTorrent (Rakshasa)", Style::ThreeAlphanumeric),
    entry(b"pX", "pHoeniX", Style::NoVersion),
    entry(b"qB", "qBittorrent", Style::Deluge),
    entry(b"st", "SharkTorrent", Style::NoVersion),
];

/// Finds the client registered with the two character code.
#[must_use]
pub fn lookup(code: &[u8; 2]) -> Option<&'static Entry> {
    CLIENTS
        .binary_search_by(|entry| entry.code.cmp(code))
        .ok()
        .and_then(|index| CLIENTS.get(index))
}
