//! Experience inference: explicit "N years" phrases reconciled with
//! employment date ranges scoped to the resume's experience section.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::calibration::Calibration;

/// Sanity window for any years-of-experience value.
const MAX_PLAUSIBLE_YEARS: f64 = 60.0;
/// Employment years outside this window are treated as noise (page numbers,
/// zip codes, graduation years far in the past).
const YEAR_MIN: i32 = 1990;
const YEAR_MAX: i32 = 2100;
/// Explicit totals that outrun the date-derived total by more than this many
/// years usually double-count overlapping roles; the inferred figure wins.
const RECONCILE_GAP_YEARS: f64 = 3.0;
/// End-marker search starts this many bytes past the section start so the
/// start marker itself cannot terminate the section.
const END_MARKER_OFFSET: usize = 10;

const SECTION_STARTS: &[&str] = &[
    "experience",
    "work experience",
    "employment",
    "professional experience",
    "career",
];
const SECTION_ENDS: &[&str] = &[
    "education",
    "academic",
    "skills",
    "certifications",
    "projects",
    "summary",
    "objective",
    "references",
];

/// Explicit "N years" phrasings, scanned over the whole lower-cased text.
static EXPLICIT_YEAR_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d{1,2}(?:\.\d+)?)\s*\+?\s*(?:years|year|yrs|yr)\b").unwrap(),
        Regex::new(r"over\s+(\d{1,2}(?:\.\d+)?)\s*(?:years|year)\b").unwrap(),
        Regex::new(r"(\d{1,2}(?:\.\d+)?)\s*(?:years|year)\s+of\s+experience").unwrap(),
    ]
});

/// "Month YYYY - Month YYYY" employment ranges; hyphen, en dash, or em dash.
/// Month names are matched by their first three letters, with an optional
/// longer form and trailing period ("Sep", "Sept.", "September").
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*)\.?\s+(\d{4})\s*[–\-—]\s*((?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*)\.?\s+(\d{4})",
    )
    .unwrap()
});

/// Outcome of the experience inference pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceMetric {
    pub years: Option<f64>,
    pub evidence: Vec<String>,
    pub rating: u8,
}

/// Infers total experience from the chunked resume text and rates it
/// against the calibration's experience band.
pub fn score_experience(chunks: &[String], calibration: &Calibration) -> ExperienceMetric {
    let text = chunks.join(" ").to_lowercase();
    let inferred = infer_years_from_ranges(&text);
    let explicit = explicit_years(&text);

    let years = match (explicit, inferred) {
        // explicit figure double-counts overlapping roles; trust the dates
        (Some(e), Some(i)) if e > i + RECONCILE_GAP_YEARS => Some(i),
        (Some(e), _) => Some(e),
        (None, Some(i)) if (0.0..=MAX_PLAUSIBLE_YEARS).contains(&i) => Some(i),
        _ => None,
    };

    let mut lo = calibration.years_experience_min.unwrap_or(0) as f64;
    let mut hi = calibration.years_experience_max.unwrap_or(30) as f64;
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }

    let Some(years) = years else {
        return ExperienceMetric {
            years: None,
            evidence: Vec::new(),
            rating: 2,
        };
    };

    let evidence = vec![format!(
        "Experience evidence: detected {} years in resume.",
        format_years(years)
    )];
    let rating = if (lo..=hi).contains(&years) {
        5
    } else if years < lo {
        let gap = lo - years;
        if gap <= 1.0 {
            4
        } else if gap <= 3.0 {
            3
        } else if gap <= 5.0 {
            2
        } else {
            1
        }
    } else {
        // above range is usually acceptable seniority
        if years - hi <= 3.0 {
            4
        } else {
            3
        }
    };

    ExperienceMetric {
        years: Some(years),
        evidence,
        rating,
    }
}

/// Formats years the way a recruiter writes them: "3", not "3.0".
pub(crate) fn format_years(years: f64) -> String {
    if (years - years.round()).abs() < f64::EPSILON {
        format!("{}", years.round() as i64)
    } else {
        format!("{years}")
    }
}

/// Largest explicit "N years" value found in `text`, within the plausible
/// window; `None` when the resume never states a total.
fn explicit_years(text: &str) -> Option<f64> {
    let mut values = Vec::new();
    for re in EXPLICIT_YEAR_RES.iter() {
        for caps in re.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            let Ok(v) = m.as_str().parse::<f64>() else {
                continue;
            };
            if (0.0..=MAX_PLAUSIBLE_YEARS).contains(&v) {
                values.push(v);
            }
        }
    }
    values.into_iter().reduce(f64::max)
}

/// Slice of `text` covering the work-experience section, or `None` when no
/// start marker exists. The section runs from the earliest start marker to
/// the first end marker found past the offset, or to end of text.
fn experience_section(text: &str) -> Option<&str> {
    let start = SECTION_STARTS
        .iter()
        .filter_map(|marker| text.find(marker))
        .min()?;
    let mut from = (start + END_MARKER_OFFSET).min(text.len());
    while from < text.len() && !text.is_char_boundary(from) {
        from += 1;
    }
    let end = SECTION_ENDS
        .iter()
        .filter_map(|marker| text[from..].find(marker).map(|i| from + i))
        .min()
        .unwrap_or(text.len());
    Some(&text[start..end])
}

/// Total experience from employment date ranges, in years rounded to one
/// decimal. Only the experience section is searched when one is detectable,
/// so education date ranges are not counted.
fn infer_years_from_ranges(text: &str) -> Option<f64> {
    let search_text = experience_section(text).unwrap_or(text);
    let mut total_months: i64 = 0;
    for caps in DATE_RANGE_RE.captures_iter(search_text) {
        let Ok(y1) = caps[2].parse::<i32>() else {
            continue;
        };
        let Ok(y2) = caps[4].parse::<i32>() else {
            continue;
        };
        if !(YEAR_MIN..=YEAR_MAX).contains(&y1) || !(YEAR_MIN..=YEAR_MAX).contains(&y2) {
            continue;
        }
        let m1 = month_number(&caps[1]).unwrap_or(1);
        let m2 = month_number(&caps[3]).unwrap_or(12);
        match (
            NaiveDate::from_ymd_opt(y1, m1, 1),
            NaiveDate::from_ymd_opt(y2, m2, 1),
        ) {
            (Some(start), Some(end)) if end >= start => {
                total_months += months_inclusive(start, end);
            }
            (Some(_), Some(_)) => {} // inverted range contributes nothing
            _ => total_months += i64::from((y2 - y1).max(0)) * 12,
        }
    }
    if total_months <= 0 {
        return None;
    }
    Some(round_one_decimal(total_months as f64 / 12.0))
}

/// Inclusive month count: Jan 2020 through Dec 2022 is 36 months.
fn months_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year() - start.year());
    let months = i64::from(end.month() as i32 - start.month() as i32);
    years * 12 + months + 1
}

fn month_number(token: &str) -> Option<u32> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    let prefix: String = token.chars().take(3).collect();
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32 + 1)
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks_of(text: &str) -> Vec<String> {
        vec![text.to_string()]
    }

    fn calibration_with_bounds(min: Option<i64>, max: Option<i64>) -> Calibration {
        Calibration {
            years_experience_min: min,
            years_experience_max: max,
            ..Calibration::default()
        }
    }

    #[test]
    fn test_date_ranges_in_experience_section_only() {
        let resume = "Experience\nSoftware Engineer, Acme Corp\nJan 2020 – Dec 2022\n\
                      Education\nBS Computer Science, 2016–2020";
        let metric = score_experience(&chunks_of(resume), &Calibration::default());
        assert_eq!(metric.years, Some(3.0));
    }

    #[test]
    fn test_education_range_with_months_is_not_counted() {
        let resume = "Experience\nEngineer at Acme\nJan 2021 – Dec 2021\n\
                      Education\nUniversity, Sep 2010 – Jun 2014";
        let metric = score_experience(&chunks_of(resume), &Calibration::default());
        // only the one-year engineering range counts
        assert_eq!(metric.years, Some(1.0));
    }

    #[test]
    fn test_multiple_ranges_sum() {
        let resume = "Experience\nRole one Jan 2020 – Dec 2020\nRole two Jan 2021 – Dec 2021";
        let metric = score_experience(&chunks_of(resume), &Calibration::default());
        assert_eq!(metric.years, Some(2.0));
    }

    #[test]
    fn test_inference_falls_back_to_whole_text_without_section_marker() {
        let resume = "Acme Corp, Jan 2021 – Jan 2023. Python, SQL.";
        let metric = score_experience(&chunks_of(resume), &Calibration::default());
        // 25 inclusive months
        assert_eq!(metric.years, Some(2.1));
    }

    #[test]
    fn test_years_outside_plausible_window_rejected() {
        let resume = "Experience Jan 1980 – Dec 1985 and Jan 2150 – Dec 2151";
        let metric = score_experience(&chunks_of(resume), &Calibration::default());
        assert_eq!(metric.years, None);
        assert_eq!(metric.rating, 2);
        assert!(metric.evidence.is_empty());
    }

    #[test]
    fn test_explicit_statement_wins_when_close_to_dates() {
        let resume = "Experience: 4 years of experience. Jan 2020 – Dec 2022 at Acme";
        let metric = score_experience(&chunks_of(resume), &Calibration::default());
        // explicit 4 vs inferred 3: gap within tolerance, explicit wins
        assert_eq!(metric.years, Some(4.0));
    }

    #[test]
    fn test_inflated_explicit_statement_is_overridden_by_dates() {
        let resume = "Experience: 10 years of experience. Feb 2021 – Jan 2023 at Acme";
        let metric = score_experience(&chunks_of(resume), &Calibration::default());
        // explicit 10 vs inferred 2.0: gap exceeds 3, dates win
        assert_eq!(metric.years, Some(2.0));
    }

    #[test]
    fn test_plus_suffix_and_abbreviations_parse() {
        let metric = score_experience(&chunks_of("Engineer with 7+ yrs in backend"), &Calibration::default());
        assert_eq!(metric.years, Some(7.0));
    }

    #[test]
    fn test_largest_explicit_value_wins() {
        let metric = score_experience(
            &chunks_of("2 years at Acme then over 6 years at Globex"),
            &Calibration::default(),
        );
        assert_eq!(metric.years, Some(6.0));
    }

    #[test]
    fn test_rating_inside_band_is_five() {
        let calibration = calibration_with_bounds(Some(2), Some(5));
        let metric = score_experience(&chunks_of("3 years of experience"), &calibration);
        assert_eq!(metric.rating, 5);
        assert_eq!(
            metric.evidence,
            vec!["Experience evidence: detected 3 years in resume.".to_string()]
        );
    }

    #[test]
    fn test_rating_degrades_below_band() {
        let calibration = calibration_with_bounds(Some(10), Some(15));
        let cases = [
            ("9 years of experience", 4),  // gap 1
            ("7 years of experience", 3),  // gap 3
            ("5 years of experience", 2),  // gap 5
            ("2 years of experience", 1),  // gap 8
        ];
        for (text, expected) in cases {
            let metric = score_experience(&chunks_of(text), &calibration);
            assert_eq!(metric.rating, expected, "for {text:?}");
        }
    }

    #[test]
    fn test_rating_above_band_stays_acceptable() {
        let calibration = calibration_with_bounds(Some(1), Some(5));
        let near = score_experience(&chunks_of("7 years of experience"), &calibration);
        assert_eq!(near.rating, 4);
        let far = score_experience(&chunks_of("12 years of experience"), &calibration);
        assert_eq!(far.rating, 3);
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let calibration = calibration_with_bounds(Some(5), Some(2));
        let metric = score_experience(&chunks_of("3 years of experience"), &calibration);
        assert_eq!(metric.rating, 5);
    }

    #[test]
    fn test_unknown_experience_rates_two() {
        let metric = score_experience(&chunks_of("no dates or totals here"), &Calibration::default());
        assert_eq!(metric.years, None);
        assert_eq!(metric.rating, 2);
    }

    #[test]
    fn test_em_dash_and_abbreviated_month_ranges() {
        let resume = "Experience at Acme Sept. 2020 — Aug 2021";
        let metric = score_experience(&chunks_of(resume), &Calibration::default());
        assert_eq!(metric.years, Some(1.0));
    }

    #[test]
    fn test_format_years_drops_trailing_zero() {
        assert_eq!(format_years(3.0), "3");
        assert_eq!(format_years(2.5), "2.5");
        assert_eq!(format_years(0.0), "0");
    }
}
