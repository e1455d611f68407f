use crate::models::{Coordinates, RouteDescription};

/// Turn a route into an ordered sequence of search anchors: the start of
/// every step of every leg, then the final leg's end point.
///
/// No interpolation is done between steps, so sparse step sequences leave
/// gaps in search coverage.
pub fn sample_route(route: &RouteDescription) -> Vec<Coordinates> {
    let mut anchors = Vec::new();

    for leg in &route.legs {
        for step in &leg.steps {
            anchors.push(step.start_location);
        }
    }

    if let Some(last_leg) = route.legs.last() {
        anchors.push(last_leg.end_location);
    }

    anchors
}
