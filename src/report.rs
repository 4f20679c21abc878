use std::collections::BTreeMap;
use std::io::Write;

use itertools::sorted;
use serde::Serialize;

use crate::material::Category;
use crate::types::{AggregationResult, Error, InvalidRow};

const SUMMARY_MESSAGE: &str = "Kiitos, että lähetit pakkaustietosi. Alla on yhteenveto painoista materiaaleittain. Muista, että Suomessa kaikki yritykset, jotka laittavat pakkauksia markkinoille, ovat velvollisia raportoimaan pakkauksensa tuotekohtaisesti ja maksamaan kierrätysmaksut. Vuoden 2024 pakkauksista on raportoitava Rinki Oy:lle 31. tammikuuta 2025 mennessä.";

const RECOMMEND_FIX_ROWS: &str = "Joissakin riveissä oli puutteita tai virheitä. Varmista, että jokaisella rivillä on materiaali ja paino kilogrammoina (esim. 'kartonki,2.5').";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub success: bool,
    pub totals: BTreeMap<Category, f64>,
    pub errors: Vec<InvalidRow>,
    pub unknown_materials: Vec<String>,
    pub message: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Guidance {
    pub heading: &'static str,
    pub bullets: Vec<&'static str>,
}

pub fn build(result: AggregationResult) -> Report {
    // The unknown set carries no order of its own; sort for stable payloads.
    let unknown_materials: Vec<String> = sorted(result.unknown_materials).collect();

    let mut recommendations = Vec::new();
    if !unknown_materials.is_empty() {
        recommendations.push(format!(
            "Seuraavat materiaalit eivät vastanneet tunnettuja luokkia: {}. Tarkista kirjoitusasu tai valitse lähin materiaaliluokka.",
            unknown_materials.join(", ")
        ));
    }
    if !result.invalid_rows.is_empty() {
        recommendations.push(RECOMMEND_FIX_ROWS.to_string());
    }

    Report {
        success: true,
        totals: result.totals,
        errors: result.invalid_rows,
        unknown_materials,
        message: SUMMARY_MESSAGE.to_string(),
        recommendations,
    }
}

pub fn epr_guidance() -> Guidance {
    Guidance {
        heading: "Pakkausvelvoitteet Suomessa",
        bullets: vec![
            "Kaikki yritykset, jotka saattavat pakkauksia Suomen markkinoille, kuuluvat tuottajavastuun piiriin.",
            "Yrityksen on liityttävä hyväksyttyyn tuottajayhteisöön (esim. Rinki Oy) ja raportoida vuosittain pakkauksensa.",
            "Raportti vuoden 2024 pakkauksista on jätettävä viimeistään 31.1.2025.",
            "Materiaalikohtainen paino (kg) tarvitaan raportointia varten; virheelliset tai puuttuvat tiedot voivat johtaa lisämaksuihin.",
            "Lisätietoja: https://rinkiin.fi ja ympäristöministeriön ohjeet.",
        ],
    }
}

pub fn save(mut writer: impl Write, payload: &impl Serialize) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut writer, payload)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    writeln!(writer).map_err(|e| Error::Serialization(e.to_string()))
}
