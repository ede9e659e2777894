use super::state::{MessageStyle, PrimesState};

pub const OK_MESSAGE_CSS: &str = "App-PrimesBox-OK-Headline";
pub const ERROR_MESSAGE_CSS: &str = "App-PrimesBox-Error-Headline";

/// Test id of the placeholder shown while there are no primes
pub const PRIMES_EMPTY_TEST_ID: &str = "primesEmpty";

/// One rendered prime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeCell {
    pub value: u64,
    /// `prime-nbr-{value}`
    pub test_id: String,
    /// The value, followed by `,` unless it is the last one
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimesArea {
    Empty,
    Cells(Vec<PrimeCell>),
}

/// What the results fieldset shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimesDisplay {
    pub legend: String,
    pub legend_class: &'static str,
    pub area: PrimesArea,
}

pub fn legend_class(style: MessageStyle) -> &'static str {
    match style {
        MessageStyle::Ok => OK_MESSAGE_CSS,
        MessageStyle::Error => ERROR_MESSAGE_CSS,
    }
}

pub fn prime_test_id(prime: u64) -> String {
    format!("prime-nbr-{}", prime)
}

pub fn display(state: &PrimesState) -> PrimesDisplay {
    let count = state.generated_primes.len();
    let area = if count == 0 {
        PrimesArea::Empty
    } else {
        PrimesArea::Cells(
            state
                .generated_primes
                .iter()
                .enumerate()
                .map(|(idx, &value)| PrimeCell {
                    value,
                    test_id: prime_test_id(value),
                    text: if idx + 1 == count {
                        value.to_string()
                    } else {
                        format!("{},", value)
                    },
                })
                .collect(),
        )
    };

    PrimesDisplay {
        legend: state.message.clone(),
        legend_class: legend_class(state.message_style),
        area,
    }
}
