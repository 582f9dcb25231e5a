use std::io::{BufRead, Write};

use crate::{
    api::API,
    config::{OutputFormat, Settings},
    entities::{demand_level_error, Quote, RideCategory, MAX_DEMAND_LEVEL, MIN_DEMAND_LEVEL},
    error::{invalid_argument_error, Error, ErrorKind},
    external::currency,
};

pub const RIDE_TYPE_PROMPT: &str = "Choose your ride (bike or car): ";
pub const DISTANCE_PROMPT: &str = "How many kilometers do you want to travel? ";
pub const DEMAND_PROMPT: &str = "How busy is it right now? Demand level 1-5 (press Enter for 3): ";

/// One interactive booking: three prompts in, one fare breakdown out.
pub struct Session<'a, A, R, W> {
    api: &'a A,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, A, R, W> Session<'a, A, R, W>
where
    A: API,
    R: BufRead,
    W: Write,
{
    pub fn new(api: &'a A, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            api,
            settings,
            input,
            output,
        }
    }

    /// Runs the session. Failures are reported to the user before being returned.
    #[tracing::instrument(name = "Session::run", skip_all)]
    pub fn run(&mut self) -> Result<Quote, Error> {
        match self.book() {
            Ok(quote) => Ok(quote),
            Err(err) => {
                if let Err(report_err) = self.report(&err) {
                    tracing::warn!(code = report_err.code, "could not report failure: {}", report_err);
                }
                Err(err)
            }
        }
    }

    fn book(&mut self) -> Result<Quote, Error> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to Ride Sharing!")?;
        writeln!(self.output, "Book your ride quickly and travel comfortably.")?;
        writeln!(self.output)?;

        let ride_type = self.prompt(RIDE_TYPE_PROMPT)?;
        let category = RideCategory::resolve(&ride_type)?;

        let distance = parse_distance(&self.prompt(DISTANCE_PROMPT)?)?;
        let demand_level = parse_demand_level(&self.prompt(DEMAND_PROMPT)?)?;

        let quote = self.api.quote_category(category, distance, demand_level)?;

        match self.settings.output {
            OutputFormat::Text => self.render(&quote)?,
            OutputFormat::Json => writeln!(self.output, "{}", serde_json::to_string_pretty(&quote)?)?,
        }

        Ok(quote)
    }

    fn prompt(&mut self, question: &str) -> Result<String, Error> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input closed before the booking was complete",
            )
            .into());
        }

        Ok(line.trim().to_string())
    }

    fn render(&mut self, quote: &Quote) -> Result<(), Error> {
        let locale = self.settings.locale;
        let fare = &quote.fare;
        let money = |amount: f64| currency::format(amount, &locale);

        writeln!(self.output)?;
        writeln!(self.output, "--- Your Ride Details ---")?;
        writeln!(self.output, "Driver: {}", quote.driver_name)?;
        writeln!(self.output, "Vehicle Number: {}", quote.vehicle_number)?;
        writeln!(self.output, "Distance: {:.2} km", quote.distance)?;
        writeln!(
            self.output,
            "Demand Level: {} (surge x{:.2})",
            quote.demand_level,
            fare.surge_multiplier()
        )?;
        writeln!(self.output, "Base Fare: {}", money(fare.base_fare()))?;
        writeln!(self.output, "Distance Fare: {}", money(fare.distance_fare()))?;
        writeln!(self.output, "Booking Fee: {}", money(fare.booking_fee()))?;
        writeln!(self.output, "Subtotal: {}", money(fare.subtotal()))?;
        if fare.is_minimum_fare_applied() {
            writeln!(
                self.output,
                "Minimum fare of {} applied.",
                money(fare.minimum_fare())
            )?;
        }
        writeln!(self.output, "Estimated Fare: {}", money(fare.total_fare()))?;
        writeln!(self.output, "Enjoy your ride!")?;
        writeln!(self.output)?;

        Ok(())
    }

    fn report(&mut self, err: &Error) -> Result<(), Error> {
        writeln!(self.output)?;

        match err.kind() {
            ErrorKind::InvalidRideType => writeln!(self.output, "{}", err.message)?,
            ErrorKind::InvalidArgument => writeln!(self.output, "Error: {}", err.message)?,
            _ => writeln!(self.output, "Unexpected error: {}", err.message)?,
        }

        Ok(())
    }
}

pub fn parse_distance(input: &str) -> Result<f64, Error> {
    input.trim().parse::<f64>().map_err(|_| {
        invalid_argument_error(format!(
            "Distance must be a number of kilometers. Received: '{}'",
            input.trim()
        ))
    })
}

/// Blank input means "use the default demand level".
pub fn parse_demand_level(input: &str) -> Result<Option<u8>, Error> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(None);
    }

    let digits = input.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(input);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid_argument_error(format!(
            "Demand level must be a whole number between 1 and 5. Received: '{}'",
            input
        )));
    }

    match input.parse::<u8>() {
        Ok(level) if (MIN_DEMAND_LEVEL..=MAX_DEMAND_LEVEL).contains(&level) => Ok(Some(level)),
        // negative or overflowing integers land here too
        _ => Err(demand_level_error(input.strip_prefix('+').unwrap_or(input))),
    }
}
