use clap::ValueEnum;

/// The three entities managed by the restaurant service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Detail,
    Review,
    Reservation,
}

const DETAIL_COLUMNS: &[&str] = &["RestaurantName", "Location", "Style", "Capacity"];
const REVIEW_COLUMNS: &[&str] = &["UserName", "RestaurantName", "Review", "Rating"];
const RESERVATION_COLUMNS: &[&str] = &["UserName", "RestaurantName", "Year", "Month", "Day"];

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Detail => "detail",
            ResourceKind::Review => "review",
            ResourceKind::Reservation => "reservation",
        }
    }

    /// Fixed positional column schema of the sample CSV.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Detail => DETAIL_COLUMNS,
            ResourceKind::Review => REVIEW_COLUMNS,
            ResourceKind::Reservation => RESERVATION_COLUMNS,
        }
    }

    /// Name of the sample file expected inside the samples directory.
    pub fn sample_file(&self) -> &'static str {
        match self {
            ResourceKind::Detail => "detail_samples.csv",
            ResourceKind::Review => "review_samples.csv",
            ResourceKind::Reservation => "reservation_samples.csv",
        }
    }
}

/// Which resource batches a replay run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceSelector {
    Detail,
    Review,
    Reservation,
    All,
}

impl ResourceSelector {
    /// Resource kinds in replay order. `All` runs review, reservation, detail.
    pub fn kinds(&self) -> &'static [ResourceKind] {
        match self {
            ResourceSelector::Detail => &[ResourceKind::Detail],
            ResourceSelector::Review => &[ResourceKind::Review],
            ResourceSelector::Reservation => &[ResourceKind::Reservation],
            ResourceSelector::All => &[
                ResourceKind::Review,
                ResourceKind::Reservation,
                ResourceKind::Detail,
            ],
        }
    }
}

/// Seed (`PUT`) or query (`GET`) mode. Every call is an HTTP POST either way;
/// the mode only picks the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationMode {
    #[value(name = "PUT", alias = "put")]
    Write,
    #[value(name = "GET", alias = "get")]
    Read,
}

impl OperationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationMode::Write => "PUT",
            OperationMode::Read => "GET",
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(self, OperationMode::Read)
    }
}
