/// One PM2.5 observation (one row of the input table).
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub location: String,
    /// Concentration in µg/m³. Always finite once loaded.
    pub value: f64,
}

impl Reading {
    pub fn new(location: impl Into<String>, value: f64) -> Self {
        Self {
            location: location.into(),
            value,
        }
    }
}

/// How values print on the poster, decided by what the input column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueFormat {
    /// Every cell is a plain integer, printed without a decimal part (`45`).
    Integer,
    /// At least one decimal cell; integral values keep one decimal (`45.0`).
    #[default]
    Decimal,
}

/// All readings of one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub readings: Vec<Reading>,
    pub value_format: ValueFormat,
}

/// Direction a ranked list is sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOrder {
    /// Highest value first (most polluted).
    Descending,
    /// Lowest value first (cleanest air).
    Ascending,
}

/// Up to N readings in rank order. Equal values keep their input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedList {
    pub order: RankOrder,
    pub readings: Vec<Reading>,
}

impl RankedList {
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Iterate as `(rank, reading)` with 1-based ranks.
    pub fn iter_ranked(&self) -> impl Iterator<Item = (usize, &Reading)> {
        self.readings.iter().enumerate().map(|(i, r)| (i + 1, r))
    }

    pub fn locations(&self) -> Vec<&str> {
        self.readings.iter().map(|r| r.location.as_str()).collect()
    }
}

/// The two lists printed on the poster.
#[derive(Debug, Clone, PartialEq)]
pub struct Rankings {
    pub top: RankedList,
    pub bottom: RankedList,
    pub value_format: ValueFormat,
}
