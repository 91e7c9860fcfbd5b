use clap::{Parser, ValueEnum};
use psem_lids::{Catalog, DeviceFamily, Lid, MeasurementUnit};

#[allow(unused)]
fn main() {}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Family {
    Generic,
    Sentinel,
    CentronMono,
    CentronPoly,
}

impl From<Family> for DeviceFamily {
    fn from(value: Family) -> Self {
        match value {
            Family::Generic => DeviceFamily::Generic,
            Family::Sentinel => DeviceFamily::Sentinel,
            Family::CentronMono => DeviceFamily::CentronMono,
            Family::CentronPoly => DeviceFamily::CentronPoly,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Unit {
    Unit,
    Kilo,
    Mega,
}

impl From<Unit> for MeasurementUnit {
    fn from(value: Unit) -> Self {
        match value {
            Unit::Unit => MeasurementUnit::Unit,
            Unit::Kilo => MeasurementUnit::Kilo,
            Unit::Mega => MeasurementUnit::Mega,
        }
    }
}

#[derive(Parser)]
pub struct CliOpts {
    /// The meter family used to interpret LIDs
    #[clap(value_enum, default_value = "generic", long, short)]
    family: Family,
    /// The scale used in descriptions
    #[clap(value_enum, default_value = "unit", long, short)]
    unit: Unit,
}

fn error<T>(val: T) -> std::io::Error
where
    T: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    std::io::Error::new(std::io::ErrorKind::Other, val)
}

impl CliOpts {
    pub fn catalog(&self) -> Catalog {
        Catalog::with_unit(self.family.into(), self.unit.into())
    }

    /// Resolve `lid`, given either as a catalog name or as a (`0x` prefixed)
    /// hexadecimal value.
    pub fn lid(&self, catalog: &Catalog, lid: &str) -> std::io::Result<Lid> {
        if let Some(lid) = catalog.get(lid) {
            return Ok(lid.clone());
        }

        let hex = lid.trim_start_matches("0x").trim_start_matches("0X");
        let value = u32::from_str_radix(hex, 16)
            .map_err(|e| error(format!("'{lid}' is not a LID name or value: {e}")))?;

        Ok(Lid::with_options(
            value,
            self.family.into(),
            self.unit.into(),
            None,
        ))
    }
}
