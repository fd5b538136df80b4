use kgsynth_core::vocab::vivo;
use kgsynth_core::{Iri, Literal};

use crate::context::GenerationContext;
use crate::errors::GenerationError;
use crate::ids::EntityKind;

/// Year-precision point in time.
pub fn date(ctx: &mut GenerationContext, year: u32) -> Result<Iri, GenerationError> {
    let date = ctx.mint(EntityKind::Date)?;
    ctx.emit_type(&date, vivo::DATE_TIME_VALUE);
    ctx.emit(&date, vivo::DATE_TIME_PRECISION, Iri::new(vivo::YEAR_PRECISION));
    ctx.emit(
        &date,
        vivo::DATE_TIME,
        Literal::date_time(format!("{year}-01-01T00:00:00")),
    );
    Ok(date)
}

/// Interval with optional start and end years; a missing end leaves it open.
pub fn interval(
    ctx: &mut GenerationContext,
    start: Option<u32>,
    end: Option<u32>,
) -> Result<Iri, GenerationError> {
    let interval = ctx.mint(EntityKind::Interval)?;
    ctx.emit_type(&interval, vivo::DATE_TIME_INTERVAL);
    if let Some(year) = start {
        let start = date(ctx, year)?;
        ctx.emit(&interval, vivo::START, start);
    }
    if let Some(year) = end {
        let end = date(ctx, year)?;
        ctx.emit(&interval, vivo::END, end);
    }
    Ok(interval)
}

/// Open interval starting at a random configured year.
pub(crate) fn open_interval_from_random_year(
    ctx: &mut GenerationContext,
) -> Result<Iri, GenerationError> {
    let year = ctx.year();
    interval(ctx, Some(year), None)
}
