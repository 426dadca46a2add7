//! Interaction state: the selected Y attribute and the hovered legend row.

use wx_lcd::attribute::DailyAttribute;
use wx_lcd::observation::DailyObservation;

/// The two user-driven inputs to a frame.
///
/// Everything else drawn on screen is a pure function of this state plus
/// the loaded records and the layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Attribute currently plotted on the Y axis
    selected: DailyAttribute,
    /// Station name under the pointer in the legend, if any
    hovered: Option<String>,
}

impl InteractionState {
    pub fn selected(&self) -> DailyAttribute {
        self.selected
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Switches the Y attribute by its CSV column key.
    ///
    /// An unknown key leaves the selection untouched and returns false, so
    /// a stale or garbled selector value can never blank the chart.
    pub fn select_attribute(&mut self, key: &str) -> bool {
        match DailyAttribute::from_key(key) {
            Some(attribute) => {
                self.selected = attribute;
                true
            }
            None => {
                log::warn!("ignoring unknown attribute key {:?}", key);
                false
            }
        }
    }

    pub fn hover_station(&mut self, station_name: &str) {
        self.hovered = Some(station_name.to_string());
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// The records matching the hovered station, in record order.
    ///
    /// Empty when no hover is active; the highlight overlay simply has
    /// nothing to draw then.
    pub fn filtered<'a>(&self, records: &'a [DailyObservation]) -> Vec<&'a DailyObservation> {
        match self.hovered.as_deref() {
            Some(station) => records
                .iter()
                .filter(|record| record.station_name == station)
                .collect(),
            None => Vec::new(),
        }
    }
}
