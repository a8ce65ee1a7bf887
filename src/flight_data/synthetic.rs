use crate::constants::{PARACHUTE_DESCENT_RATE, STANDARD_GRAVITY, TIME_STEP};
use crate::flight_data::{FlightData, FlightDataBranch, FlightDataType};

const MAX_PROFILE_TIME: f64 = 3600.0; // s

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Boost,
    Coast,
    Descent,
}

/// Single-stage vertical flight used for demos and tests: constant-thrust
/// boost, ballistic coast with quadratic drag, then a parachute descent at a
/// fixed rate starting `deployment_delay` seconds after apogee.
///
/// This is a stand-in for a real simulation engine, not a replacement.
#[derive(Debug, Clone)]
pub struct SyntheticProfile {
    pub burn_time: f64,
    pub thrust_acceleration: f64,
    pub drag_factor: f64,
    pub deployment_delay: f64,
    pub time_step: f64,
}

impl Default for SyntheticProfile {
    fn default() -> Self {
        SyntheticProfile {
            burn_time: 2.0,
            thrust_acceleration: 60.0,
            drag_factor: 0.0,
            deployment_delay: 3.0,
            time_step: TIME_STEP,
        }
    }
}

impl SyntheticProfile {
    pub fn new(burn_time: f64, thrust_acceleration: f64, drag_factor: f64) -> Self {
        SyntheticProfile {
            burn_time,
            thrust_acceleration,
            drag_factor,
            ..Default::default()
        }
    }

    pub fn with_deployment_delay(mut self, deployment_delay: f64) -> Self {
        self.deployment_delay = deployment_delay;
        self
    }

    fn drag(&self, velocity: f64) -> f64 {
        self.drag_factor * velocity * velocity.abs()
    }

    /// Samples the profile into a one-branch flight record.
    pub fn generate(&self) -> FlightData {
        let mut times = Vec::new();
        let mut altitudes = Vec::new();
        let mut velocities = Vec::new();
        let mut accelerations = Vec::new();

        let mut time = 0.0;
        let mut altitude = 0.0;
        let mut velocity = 0.0;
        let mut phase = Phase::Boost;
        let mut apogee_time: Option<f64> = None;

        while time < MAX_PROFILE_TIME {
            let acceleration = match phase {
                Phase::Boost => self.thrust_acceleration + STANDARD_GRAVITY - self.drag(velocity),
                Phase::Coast => STANDARD_GRAVITY - self.drag(velocity),
                Phase::Descent => 0.0,
            };

            times.push(time);
            altitudes.push(altitude);
            velocities.push(velocity);
            accelerations.push(acceleration);

            velocity += acceleration * self.time_step;
            altitude += velocity * self.time_step;
            time += self.time_step;

            if phase != Phase::Boost && altitude <= 0.0 {
                // Touchdown sample: at rest on the pad
                times.push(time);
                altitudes.push(0.0);
                velocities.push(0.0);
                accelerations.push(0.0);
                break;
            }

            match phase {
                Phase::Boost if time >= self.burn_time => phase = Phase::Coast,
                Phase::Coast => {
                    if apogee_time.is_none() && velocity <= 0.0 {
                        apogee_time = Some(time);
                    }
                    if let Some(apogee) = apogee_time {
                        if time - apogee >= self.deployment_delay {
                            phase = Phase::Descent;
                            velocity = PARACHUTE_DESCENT_RATE;
                        }
                    }
                }
                _ => {}
            }
        }

        let branch = FlightDataBranch::new("Sustainer")
            .with_series(FlightDataType::Time, times)
            .with_series(FlightDataType::Altitude, altitudes)
            .with_series(FlightDataType::VelocityZ, velocities)
            .with_series(FlightDataType::AccelerationZ, accelerations);

        FlightData::new(vec![branch])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PRIMARY_BRANCH;
    use crate::flight_data::FlightDataSource;

    #[test]
    fn test_profile_is_aligned_and_lands() {
        let data = SyntheticProfile::default().generate();
        let branch = data.branch(PRIMARY_BRANCH).unwrap();

        assert!(branch.validate().is_ok());
        assert!(branch.len() > 100);

        let altitudes = branch.get(FlightDataType::Altitude).unwrap();
        assert_eq!(*altitudes.last().unwrap(), 0.0);
        let apogee = altitudes.iter().cloned().fold(0.0, f64::max);
        assert!(apogee > 400.0, "expected a real climb, got {:.1} m", apogee);
    }

    #[test]
    fn test_times_strictly_increase() {
        let data = SyntheticProfile::new(1.5, 40.0, 0.001).generate();
        let times = data.branch(0).unwrap().get(FlightDataType::Time).unwrap();
        assert!(times.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_boost_then_ballistic_coast() {
        let data = SyntheticProfile::default().generate();
        let branch = data.branch(0).unwrap();
        let accelerations = branch.get(FlightDataType::AccelerationZ).unwrap();

        assert_eq!(accelerations[0], 60.0 + STANDARD_GRAVITY);
        assert!(accelerations.iter().any(|&a| a == STANDARD_GRAVITY));
        assert_eq!(*accelerations.last().unwrap(), 0.0);
    }
}
