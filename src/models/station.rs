use serde::Serialize;

/// Number of stations served by this deployment.
pub const STATION_COUNT: usize = 6;

/// One of the fixed shuttle stops a rider may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StationId {
    DienBienPhu,    // station1
    NgaTuBinhPhuoc, // station2
    AeonBinhDuong,  // station3
    ChoHangBong,    // station4
    NgaTuThuDuc,    // station5
    VincomDiAn,     // station6
}

impl StationId {
    /// Catalog order, matching the column order of the feed.
    pub const ALL: [StationId; STATION_COUNT] = [
        StationId::DienBienPhu,
        StationId::NgaTuBinhPhuoc,
        StationId::AeonBinhDuong,
        StationId::ChoHangBong,
        StationId::NgaTuThuDuc,
        StationId::VincomDiAn,
    ];

    /// Zero-based position in the catalog (and in `StationFlags`).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable key used in the feed schema and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            StationId::DienBienPhu => "station1",
            StationId::NgaTuBinhPhuoc => "station2",
            StationId::AeonBinhDuong => "station3",
            StationId::ChoHangBong => "station4",
            StationId::NgaTuThuDuc => "station5",
            StationId::VincomDiAn => "station6",
        }
    }

    /// Human-readable name shown in tables.
    pub fn display_name(self) -> &'static str {
        match self {
            StationId::DienBienPhu => "Điện Biên Phủ",
            StationId::NgaTuBinhPhuoc => "Ngã tư Bình Phước",
            StationId::AeonBinhDuong => "AEON Bình Dương",
            StationId::ChoHangBong => "Chợ Hàng Bông",
            StationId::NgaTuThuDuc => "Ngã tư Thủ Đức",
            StationId::VincomDiAn => "Vincom Dĩ An",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Helper: accept `station3`, `STATION3` or a bare catalog number `3`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        if let Ok(n) = code.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied());
        }
        Self::from_key(&code)
    }
}

/// Per-shift usage flags, one slot per catalog station.
///
/// Being a fixed array, every station is always present: a row can never
/// carry a partial mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StationFlags([bool; STATION_COUNT]);

impl StationFlags {
    pub fn new(flags: [bool; STATION_COUNT]) -> Self {
        Self(flags)
    }

    pub fn get(&self, station: StationId) -> bool {
        self.0[station.index()]
    }

    pub fn set(&mut self, station: StationId, value: bool) {
        self.0[station.index()] = value;
    }

    /// True when at least one station is used in this shift.
    pub fn any(&self) -> bool {
        self.0.iter().any(|&v| v)
    }

    /// Stations flagged true, in catalog order.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        StationId::ALL.into_iter().filter(|s| self.get(*s))
    }
}

impl Serialize for StationFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(STATION_COUNT))?;
        for station in StationId::ALL {
            map.serialize_entry(station.key(), &self.get(station))?;
        }
        map.end()
    }
}
