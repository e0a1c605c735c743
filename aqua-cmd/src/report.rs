//! Registry reports: listing, nearest lake and composition.

use aqua_lakes::composition::QualityBreakdown;
use aqua_lakes::detail;
use aqua_lakes::lake::{GeoPoint, LakeRecord};
use aqua_lakes::quality::WaterQuality;
use aqua_lakes::registry::Registry;
use aqua_lakes::search::visible_lakes;
use log::info;

/// Print the lakes visible for `query` and `quality` as CSV on stdout.
pub fn run_lakes(query: &str, quality: Option<WaterQuality>) -> anyhow::Result<()> {
    let registry = Registry::builtin()?;
    let listing = visible_lakes(query, quality, registry.lakes());
    info!(
        "{:?} listing: {} of {} lakes",
        listing.mode,
        listing.lakes.len(),
        registry.len()
    );
    if listing.is_no_match() {
        eprintln!("No lakes match {:?}", query);
        return Ok(());
    }
    print!("{}", lakes_csv(&listing.lakes)?);
    Ok(())
}

/// Print the lake closest to (`lat`, `lon`).
pub fn run_nearest(lat: f64, lon: f64) -> anyhow::Result<()> {
    let origin = GeoPoint::new(lat, lon);
    if !origin.is_valid() {
        anyhow::bail!("coordinate ({}, {}) is out of range", lat, lon);
    }
    let registry = Registry::builtin()?;
    let lake = registry.nearest_to(&origin)?;
    println!("{}", describe_nearest(lake, &origin));
    Ok(())
}

/// Print the detail card for one lake.
pub fn run_show(id: &str) -> anyhow::Result<()> {
    let registry = Registry::builtin()?;
    let lake = registry.require(&id.into())?;
    println!("{}", describe_lake(lake));
    Ok(())
}

/// Print the registry composition by quality.
pub fn run_summary() -> anyhow::Result<()> {
    let registry = Registry::builtin()?;
    print!("{}", composition_table(&QualityBreakdown::of(registry.lakes())));
    Ok(())
}

fn lakes_csv(lakes: &[&LakeRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["ID", "NAME", "LOCATION", "LATITUDE", "LONGITUDE", "QUALITY"])?;
    for lake in lakes {
        let lat = lake.lat.to_string();
        let lon = lake.lon.to_string();
        wtr.write_record([
            lake.id.as_str(),
            lake.name.as_str(),
            lake.location.as_str(),
            lat.as_str(),
            lon.as_str(),
            lake.quality.as_str(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!("csv flush: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

fn describe_nearest(lake: &LakeRecord, origin: &GeoPoint) -> String {
    format!(
        "{} ({}), {} quality, {:.3} degrees away\n{}",
        lake.name,
        lake.location,
        lake.quality,
        origin.planar_distance(&lake.coordinates()),
        detail::directions_url(lake)
    )
}

fn describe_lake(lake: &LakeRecord) -> String {
    format!(
        "{} ({})\nQuality:   {}\nTurbidity: {}\npH:        {}\n{}\n{}",
        lake.name,
        lake.location,
        lake.quality,
        detail::turbidity_label(),
        detail::ph_label(),
        detail::conservation_summary(lake),
        detail::directions_url(lake)
    )
}

fn composition_table(breakdown: &QualityBreakdown) -> String {
    let mut out = format!("{} lakes\n", breakdown.total);
    for share in &breakdown.shares {
        out.push_str(&format!(
            "{:<10} {:>3} {:>4}%\n",
            share.quality.as_str(),
            share.count,
            share.rounded_percent()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lakes_csv_has_header_and_rows() {
        let registry = Registry::builtin().unwrap();
        let listing = visible_lakes("", Some(WaterQuality::Hazardous), registry.lakes());
        let csv = lakes_csv(&listing.lakes).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,NAME,LOCATION,LATITUDE,LONGITUDE,QUALITY");
        assert_eq!(lines.len(), 4);
        assert!(lines[1..].iter().all(|l| l.ends_with(",hazardous")));
    }

    #[test]
    fn nearest_description_names_lake_and_link() {
        let registry = Registry::builtin().unwrap();
        let origin = GeoPoint::new(13.03, 77.59);
        let lake = registry.nearest_to(&origin).unwrap();
        let text = describe_nearest(lake, &origin);
        assert!(text.starts_with("Hebbal Lake"));
        assert!(text.contains("https://www.google.com/maps/search/?api=1&query="));
    }

    #[test]
    fn lake_card_shows_readings_and_summary() {
        let registry = Registry::builtin().unwrap();
        let card = describe_lake(registry.require(&"1".into()).unwrap());
        assert!(card.starts_with("Dal Lake (Kashmir)"));
        assert!(card.contains("Turbidity: 4.2 NTU"));
        assert!(card.contains("pH:        7.4 pH"));
        assert!(card.contains("excellent biological diversity"));
    }

    #[test]
    fn show_unknown_lake_fails() {
        assert!(run_show("999").is_err());
    }

    #[test]
    fn composition_table_lists_every_quality() {
        let registry = Registry::builtin().unwrap();
        let table = composition_table(&QualityBreakdown::of(registry.lakes()));
        assert!(table.starts_with("18 lakes\n"));
        assert!(table.contains("fresh        9   50%"));
        assert!(table.contains("normal       6   33%"));
        assert!(table.contains("hazardous    3   17%"));
    }

    #[test]
    fn nearest_rejects_out_of_range_origin() {
        assert!(run_nearest(120.0, 0.0).is_err());
    }
}
