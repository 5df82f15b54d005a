//! Workbook-wide settings used during cell serialization

/// Origin for serial date arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateSystem {
    /// 1900 date system (Windows). Day zero is 1899-12-30 and the format
    /// keeps the fictitious 1900-02-29 as serial 60.
    #[default]
    Windows1900,
    /// 1904 date system (Mac). Day zero is 1904-01-01.
    Mac1904,
}

impl DateSystem {
    /// Days from 0001-01-01 (CE day 1) to day zero of this system
    pub fn epoch_days_from_ce(&self) -> i32 {
        match self {
            // 1899-12-30
            DateSystem::Windows1900 => 693_594,
            // 1904-01-01
            DateSystem::Mac1904 => 695_056,
        }
    }
}

/// Workbook settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorkbookSettings {
    /// Write date cells as ISO 8601 text (`t="d"`) instead of serial numbers
    pub iso_dates: bool,
    /// Date system for serial numbers
    pub date_system: DateSystem,
}

impl WorkbookSettings {
    pub fn with_iso_dates(mut self, iso_dates: bool) -> Self {
        self.iso_dates = iso_dates;
        self
    }

    pub fn with_date_system(mut self, date_system: DateSystem) -> Self {
        self.date_system = date_system;
        self
    }
}
