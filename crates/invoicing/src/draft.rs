use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use freightdesk_core::ValueObject;

/// Unit of measure for one invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnitOfMeasure {
    Pcs,
    Kg,
    Lbs,
    Mtr,
    Box,
    Ctn,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 6] = [
        UnitOfMeasure::Pcs,
        UnitOfMeasure::Kg,
        UnitOfMeasure::Lbs,
        UnitOfMeasure::Mtr,
        UnitOfMeasure::Box,
        UnitOfMeasure::Ctn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitOfMeasure::Pcs => "PCS",
            UnitOfMeasure::Kg => "KG",
            UnitOfMeasure::Lbs => "LBS",
            UnitOfMeasure::Mtr => "MTR",
            UnitOfMeasure::Box => "BOX",
            UnitOfMeasure::Ctn => "CTN",
        }
    }

    fn from_input(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.as_str() == raw.trim())
    }
}

/// Invoice flavor, as named on the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Standard,
    Proforma,
    Commercial,
}

/// One row of the invoice: a product/service with quantity, unit price and
/// derived total. `id` is the 1-based sequence position of the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLine {
    pub id: u32,
    #[serde(rename = "desc")]
    pub description: String,
    pub hs_code: String,
    pub uom: Option<UnitOfMeasure>,
    pub quantity: f64,
    pub unit_price: f64,
    pub total: f64,
}

impl ProductLine {
    fn blank(id: u32) -> Self {
        Self {
            id,
            description: String::new(),
            hs_code: String::new(),
            uom: None,
            quantity: 0.0,
            unit_price: 0.0,
            total: 0.0,
        }
    }

    /// Fixed two-decimal rendering of the line total.
    pub fn total_display(&self) -> String {
        format!("{:.2}", self.total)
    }
}

impl ValueObject for ProductLine {}

/// Editable fields of a line, for callers driving edits from raw form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    Description,
    HsCode,
    Uom,
    Quantity,
    UnitPrice,
}

/// A single-field edit to one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineEdit {
    Description(String),
    HsCode(String),
    Uom(UnitOfMeasure),
    Quantity(f64),
    UnitPrice(f64),
}

impl LineEdit {
    /// Build an edit from raw keystroke input.
    ///
    /// Malformed or negative numeric input (and unknown units) yields `None`:
    /// the editor keeps the prior value rather than storing an invalid
    /// numeric state.
    pub fn parse(field: LineField, raw: &str) -> Option<Self> {
        match field {
            LineField::Description => Some(Self::Description(raw.to_string())),
            LineField::HsCode => Some(Self::HsCode(raw.trim().to_string())),
            LineField::Uom => UnitOfMeasure::from_input(raw).map(Self::Uom),
            LineField::Quantity => parse_non_negative(raw).map(Self::Quantity),
            LineField::UnitPrice => parse_non_negative(raw).map(Self::UnitPrice),
        }
    }
}

fn parse_non_negative(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// In-memory editable state of one invoice, tied to one shipment record.
///
/// Transient: created fresh when the editor opens, mutated in place, handed
/// off once through [`crate::submit`] and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub date: NaiveDate,
    pub currency: String,
    pub notes: String,
    pub invoice_type: InvoiceType,
    pub(crate) amount: String,
    pub(crate) lines: Vec<ProductLine>,
}

impl InvoiceDraft {
    /// Fresh draft: one blank line, USD, standard type, dated `today`.
    pub fn open(today: NaiveDate) -> Self {
        let mut draft = Self {
            invoice_number: String::new(),
            date: today,
            currency: "USD".to_string(),
            notes: String::new(),
            invoice_type: InvoiceType::default(),
            amount: String::new(),
            lines: vec![ProductLine::blank(1)],
        };
        draft.recalculate_amount();
        draft
    }

    /// Derived header amount: the decimal string of the sum of line totals.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn lines(&self) -> &[ProductLine] {
        &self.lines
    }

    /// Apply one edit to one line. Quantity/unit-price edits recompute the
    /// line total, then the header amount, before returning.
    ///
    /// Returns `false` (and changes nothing) for an out-of-range index or a
    /// negative/non-finite numeric value.
    pub fn update_line(&mut self, index: usize, edit: LineEdit) -> bool {
        let Some(line) = self.lines.get_mut(index) else {
            return false;
        };
        match edit {
            LineEdit::Description(value) => line.description = value,
            LineEdit::HsCode(value) => line.hs_code = value,
            LineEdit::Uom(value) => line.uom = Some(value),
            LineEdit::Quantity(value) => {
                if !value.is_finite() || value < 0.0 {
                    return false;
                }
                line.quantity = value;
                line.total = line.quantity * line.unit_price;
            }
            LineEdit::UnitPrice(value) => {
                if !value.is_finite() || value < 0.0 {
                    return false;
                }
                line.unit_price = value;
                line.total = line.quantity * line.unit_price;
            }
        }
        self.recalculate_amount();
        true
    }

    /// Append a blank line with `id` = line count + 1.
    pub fn add_line(&mut self) {
        let id = self.lines.len() as u32 + 1;
        self.lines.push(ProductLine::blank(id));
        self.recalculate_amount();
    }

    /// Remove the referenced line and renumber the rest.
    ///
    /// A no-op (returns `false`) when the index is out of range or the line
    /// is the only one left; the draft always keeps at least one line.
    pub fn remove_line(&mut self, index: usize) -> bool {
        if self.lines.len() <= 1 || index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        for (position, line) in self.lines.iter_mut().enumerate() {
            line.id = position as u32 + 1;
        }
        self.recalculate_amount();
        true
    }

    /// Pure recomputation over the whole collection; runs after every
    /// mutation so the header amount is never stale.
    fn recalculate_amount(&mut self) {
        let sum: f64 = self.lines.iter().map(|line| line.total).sum();
        self.amount = format!("{sum}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn draft_with_two_lines() -> InvoiceDraft {
        // [{qty: 2, price: 10}, {qty: 1, price: 5}]
        let mut draft = InvoiceDraft::open(sample_date());
        draft.update_line(0, LineEdit::Quantity(2.0));
        draft.update_line(0, LineEdit::UnitPrice(10.0));
        draft.add_line();
        draft.update_line(1, LineEdit::Quantity(1.0));
        draft.update_line(1, LineEdit::UnitPrice(5.0));
        draft
    }

    #[test]
    fn opens_with_one_blank_line_and_usd_defaults() {
        let draft = InvoiceDraft::open(sample_date());
        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.lines()[0], ProductLine::blank(1));
        assert_eq!(draft.currency, "USD");
        assert_eq!(draft.invoice_type, InvoiceType::Standard);
        assert_eq!(draft.date, sample_date());
        assert_eq!(draft.amount(), "0");
    }

    #[test]
    fn amount_is_the_sum_of_line_totals() {
        let draft = draft_with_two_lines();
        assert_eq!(draft.lines()[0].total, 20.0);
        assert_eq!(draft.lines()[1].total, 5.0);
        assert_eq!(draft.amount(), "25");
    }

    #[test]
    fn quantity_edit_recomputes_line_total_and_amount() {
        let mut draft = draft_with_two_lines();
        assert!(draft.update_line(0, LineEdit::Quantity(3.0)));
        assert_eq!(draft.lines()[0].total, 30.0);
        assert_eq!(draft.amount(), "35");
    }

    #[test]
    fn fractional_amounts_keep_their_decimal_string() {
        let mut draft = InvoiceDraft::open(sample_date());
        draft.update_line(0, LineEdit::Quantity(2.0));
        draft.update_line(0, LineEdit::UnitPrice(10.25));
        assert_eq!(draft.amount(), "20.5");
        assert_eq!(draft.lines()[0].total_display(), "20.50");
    }

    #[test]
    fn add_line_appends_blank_row_and_leaves_prior_rows_untouched() {
        let mut draft = draft_with_two_lines();
        let before = draft.lines().to_vec();
        draft.add_line();
        assert_eq!(draft.lines().len(), 3);
        assert_eq!(&draft.lines()[..2], &before[..]);
        assert_eq!(draft.lines()[2], ProductLine::blank(3));
        assert_eq!(draft.amount(), "25");
    }

    #[test]
    fn removing_the_last_remaining_line_is_a_no_op() {
        let mut draft = InvoiceDraft::open(sample_date());
        let before = draft.clone();
        assert!(!draft.remove_line(0));
        assert_eq!(draft, before);
        assert_eq!(draft.lines().len(), 1);
    }

    #[test]
    fn remove_line_renumbers_and_recomputes() {
        let mut draft = draft_with_two_lines();
        assert!(draft.remove_line(0));
        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.lines()[0].id, 1);
        assert_eq!(draft.lines()[0].total, 5.0);
        assert_eq!(draft.amount(), "5");
    }

    #[test]
    fn out_of_range_index_is_absorbed() {
        let mut draft = draft_with_two_lines();
        let before = draft.clone();
        assert!(!draft.update_line(7, LineEdit::Quantity(9.0)));
        assert!(!draft.remove_line(7));
        assert_eq!(draft, before);
    }

    #[test]
    fn malformed_numeric_input_yields_no_edit() {
        assert_eq!(LineEdit::parse(LineField::Quantity, "abc"), None);
        assert_eq!(LineEdit::parse(LineField::Quantity, ""), None);
        assert_eq!(LineEdit::parse(LineField::UnitPrice, "-3"), None);
        assert_eq!(LineEdit::parse(LineField::UnitPrice, "NaN"), None);
        assert_eq!(
            LineEdit::parse(LineField::Quantity, " 2.5 "),
            Some(LineEdit::Quantity(2.5))
        );
    }

    #[test]
    fn uom_input_parses_only_known_units() {
        assert_eq!(
            LineEdit::parse(LineField::Uom, "KG"),
            Some(LineEdit::Uom(UnitOfMeasure::Kg))
        );
        assert_eq!(LineEdit::parse(LineField::Uom, "TONNE"), None);
    }

    #[test]
    fn negative_direct_edits_are_absorbed() {
        let mut draft = draft_with_two_lines();
        let before = draft.clone();
        assert!(!draft.update_line(0, LineEdit::Quantity(-1.0)));
        assert!(!draft.update_line(0, LineEdit::UnitPrice(f64::INFINITY)));
        assert_eq!(draft, before);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add,
            Remove(usize),
            Quantity(usize, f64),
            UnitPrice(usize, f64),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                Just(Op::Add),
                (0usize..8).prop_map(Op::Remove),
                ((0usize..8), 0.0f64..1000.0).prop_map(|(i, q)| Op::Quantity(i, q)),
                ((0usize..8), 0.0f64..1000.0).prop_map(|(i, p)| Op::UnitPrice(i, p)),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: after any edit sequence, the header amount equals
            /// the sum of line totals, each total equals quantity x price,
            /// ids stay 1..=len, and the draft never runs out of lines.
            #[test]
            fn amount_tracks_line_totals_under_arbitrary_edits(
                ops in proptest::collection::vec(op_strategy(), 0..40)
            ) {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                let mut draft = InvoiceDraft::open(date);

                for op in ops {
                    match op {
                        Op::Add => draft.add_line(),
                        Op::Remove(i) => {
                            draft.remove_line(i);
                        }
                        Op::Quantity(i, q) => {
                            draft.update_line(i, LineEdit::Quantity(q));
                        }
                        Op::UnitPrice(i, p) => {
                            draft.update_line(i, LineEdit::UnitPrice(p));
                        }
                    }

                    prop_assert!(!draft.lines().is_empty());
                    let sum: f64 = draft.lines().iter().map(|l| l.total).sum();
                    let expected = format!("{sum}");
                    prop_assert_eq!(draft.amount(), expected.as_str());
                    for (position, line) in draft.lines().iter().enumerate() {
                        prop_assert_eq!(line.id as usize, position + 1);
                        prop_assert_eq!(line.total, line.quantity * line.unit_price);
                    }
                }
            }
        }
    }
}
