//! Sublet listing card.
//!
//! # Design
//! - Everything shown is derived from the `Property` record; the card keeps no state.
//! - The image strip is a scroll-snap carousel with no controls of its own.
//! - Unparseable dates are shown as an error line rather than a guessed date.

use crate::components::layout::{Col, Row};
use crate::core::property::Property;
use crate::core::theme;
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PropertyCardProps {
    pub property: Property,
}

fn carousel(property: &Property) -> Html {
    if property.images.is_empty() {
        return html! {
            <div class="carousel rounded-xl w-full max-w-xs placeholder-image" />
        };
    }
    html! {
        <div class="carousel rounded-xl w-full max-w-xs overflow-hidden">
            { for property.images.iter().map(|image| html! {
                <div class="carousel-item w-full" key={image.id}>
                    <img
                        class="rounded-xl select-none"
                        draggable="false"
                        src={image.image.clone()}
                        alt="Property image"
                        width="800"
                        height="800"
                    />
                </div>
            }) }
        </div>
    }
}

#[function_component(PropertyCard)]
pub(crate) fn property_card(props: &PropertyCardProps) -> Html {
    let property = &props.property;
    let dates = property.date_range().unwrap_or_else(|err| {
        console::error!("listing has unreadable dates", property.id.to_string(), err.to_string());
        err.to_string()
    });
    html! {
        <div class="relative space-y-1 property-card">
            if property.pending_offers > 0 {
                <div class="property-badge" style={format!("background: {};", theme::RED.var())}>
                    {property.pending_offers.to_string()}
                </div>
            }
            {carousel(property)}
            <div class="flex justify-between pt-3">
                <div class="font-bold text-xl">{property.title.clone()}</div>
                <div class="flex items-center gap-2">
                    <span class="status-dot" style={format!("background: {};", theme::GREEN.var())} />
                    <p class="text-sm font-medium">{"Pending"}</p>
                </div>
            </div>
            <div class="property-details">
                <p class="text-sm font-medium">{dates}</p>
                if let Some(street) = property.street_line() {
                    <p class="text-sm font-medium">{street.to_string()}</p>
                }
                <p class="text-sm font-medium">
                    <span class="font-extrabold">{format!("${}", property.price_text())}</span>
                    {"/month"}
                </p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PropertyGridProps {
    pub properties: Vec<Property>,
}

#[function_component(PropertyGrid)]
pub(crate) fn property_grid(props: &PropertyGridProps) -> Html {
    html! {
        <Row margin="0.75rem">
            { for props.properties.iter().map(|property| html! {
                <Col sm=12 md=6 lg=4 padding="0.75rem" key={property.id}>
                    <PropertyCard property={property.clone()} />
                </Col>
            }) }
        </Row>
    }
}
