//! Dropdown for filtering the bubble chart by airline.

use crate::state::AppState;
use crate::AIRLINE_DROPDOWN_ID;
use dioxus::prelude::*;
use tsa_data::bubbles::airline_options;

/// Airline dropdown. Options are "all" followed by each airline in the
/// aggregation; changing it updates `selected_airline`.
#[component]
pub fn AirlineSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = airline_options(&state.bubbles.read());
    let selected = (state.selected_airline)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_airline.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: AIRLINE_DROPDOWN_ID,
                style: "font-weight: bold; margin-right: 8px;",
                "Airline: "
            }
            select {
                id: AIRLINE_DROPDOWN_ID,
                onchange: on_change,
                for airline in options.iter() {
                    option {
                        key: "{airline}",
                        value: "{airline}",
                        selected: *airline == selected,
                        "{airline}"
                    }
                }
            }
        }
    }
}
