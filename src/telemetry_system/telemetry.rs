use crate::gravity_system::simulation::Simulation;
use crate::utils::units::convert_duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ApproachRecord {
    pub name: String,
    pub closest: f64,
    pub farthest: f64,
}

pub struct Telemetry {
    pub log: Vec<String>,
    approaches: Vec<ApproachRecord>,
    simulation_time: f64,
    samples: u64,
}

impl Telemetry {
    pub fn new() -> Self {
        Telemetry {
            log: Vec::new(),
            approaches: Vec::new(),
            simulation_time: 0.0,
            samples: 0,
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        let (magnitude, unit) = convert_duration(elapsed_time);
        format!("{} {}(s)", magnitude, unit)
    }

    fn format_distance(distance: f64) -> String {
        format!("{:.1}km", distance / 1000.0)
    }

    /// Records one sample. Call after each successful `Simulation::step`.
    pub fn collect_data(&mut self, simulation: &Simulation) {
        self.simulation_time = simulation.elapsed_time();
        self.samples += 1;

        let Some(central) = simulation.central_body() else {
            self.log.push(format!(
                "Time: {} | no central body",
                Self::format_time(self.simulation_time)
            ));
            return;
        };

        let mut readings = Vec::new();
        for body in simulation.bodies().iter().filter(|body| !body.is_central()) {
            let distance = body.distance_to_central();
            match self
                .approaches
                .iter_mut()
                .find(|record| record.name == body.name())
            {
                Some(record) => {
                    record.closest = record.closest.min(distance);
                    record.farthest = record.farthest.max(distance);
                }
                None => self.approaches.push(ApproachRecord {
                    name: body.name().to_string(),
                    closest: distance,
                    farthest: distance,
                }),
            }
            readings.push(format!("{} {}", body.name(), Self::format_distance(distance)));
        }

        self.log.push(format!(
            "Time: {} | {} at {:.0} | {}",
            Self::format_time(self.simulation_time),
            central.name(),
            central.position(),
            readings.join(", ")
        ));
    }

    pub fn approach(&self, name: &str) -> Option<&ApproachRecord> {
        self.approaches.iter().find(|record| record.name == name)
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Simulation Summary ---");
        println!(
            "Simulated Time: {} over {} ticks",
            Self::format_time(self.simulation_time),
            self.samples
        );
        for record in &self.approaches {
            println!(
                "{}: closest {}, farthest {}",
                record.name,
                Self::format_distance(record.closest),
                Self::format_distance(record.farthest)
            );
        }
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Telemetry::new()
    }
}
