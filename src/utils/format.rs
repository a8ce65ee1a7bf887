use crate::parameters::UnitFamily;

pub fn format_time(elapsed_time: f64) -> String {
    if elapsed_time >= 3600.0 {
        let hours = (elapsed_time / 3600.0).floor();
        let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
    } else if elapsed_time >= 60.0 {
        let minutes = (elapsed_time / 60.0).floor();
        let seconds = elapsed_time % 60.0;
        format!("{:.0}m {:.2}s", minutes, seconds)
    } else {
        format!("{:.2}s", elapsed_time)
    }
}

pub fn format_distance(distance: f64) -> String {
    if distance.abs() >= 1000.0 {
        format!("{:.2} km", distance / 1000.0)
    } else {
        format!("{:.2} m", distance)
    }
}

/// Human-readable rendering of a parameter value in its unit family.
pub fn format_value(value: f64, family: UnitFamily) -> String {
    if !value.is_finite() {
        return format!("{} {}", value, family.si_unit());
    }
    match family {
        UnitFamily::FlightTime => format_time(value),
        UnitFamily::Distance => format_distance(value),
        UnitFamily::Velocity | UnitFamily::Acceleration => {
            format!("{:.2} {}", value, family.si_unit())
        }
    }
}
