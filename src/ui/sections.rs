use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::model::contact::ContactModel;
use crate::app::model::hero::{HeroModel, HeroPhase, HERO_COMMAND};
use crate::content::labels::UiLabels;
use crate::content::resume::{MetricTrend, ResumeData};
use crate::content::SectionId;

use super::common::{description_lines, eyebrow_line, tag_line, title_line, wrap_text};
use super::constants::{
    ACCENT, BRIGHT_BLACK, DIM_STYLE, GREEN, OPERATIONAL, RED, WHITE, YELLOW,
};

const SPINNER_FRAMES: [&str; 6] = ["⠋", "⠙", "⠸", "⠴", "⠦", "⠇"];

/// Renders one section to rows for the given width. The document builder
/// stitches these together and records each section's top row.
pub fn section_lines(
    section: SectionId,
    resume: &ResumeData,
    labels: &'static UiLabels,
    hero: &HeroModel,
    contact: &ContactModel,
    ticks: u32,
    width: u16,
) -> Vec<Line<'static>> {
    match section {
        SectionId::Hero => hero_lines(resume, labels, hero, ticks, width),
        SectionId::Metrics => metrics_lines(resume, labels, width),
        SectionId::Experience => experience_lines(resume, labels, width),
        SectionId::Education => education_lines(resume, labels),
        SectionId::Skills => skills_lines(resume, labels, width),
        SectionId::Contact => contact_lines(resume, labels, contact, width),
    }
}

fn value_span(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
}

fn bold_white(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(WHITE).add_modifier(Modifier::BOLD))
}

fn hero_lines(
    resume: &ResumeData,
    labels: &'static UiLabels,
    hero: &HeroModel,
    ticks: u32,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = vec![eyebrow_line(labels.hero.eyebrow), Line::from(bold_white(resume.profile.role.clone()))];
    lines.extend(description_lines(&resume.summary, width));

    // KPI chips: first two metrics plus the years-of-experience figure
    let mut kpis: Vec<(String, String)> = resume
        .metrics
        .iter()
        .take(2)
        .map(|metric| (metric.label.clone(), metric.value.clone()))
        .collect();
    if let Some(years) = resume.years_of_experience() {
        kpis.push((
            labels.hero.kpi_experience_label.to_string(),
            format!("{years} {}", labels.hero.years_suffix),
        ));
    }
    let mut chip_spans: Vec<Span<'static>> = Vec::new();
    for (index, (label, value)) in kpis.into_iter().enumerate() {
        if index > 0 {
            chip_spans.push(Span::raw("  "));
        }
        chip_spans.push(Span::styled(format!("[{label}: "), DIM_STYLE));
        chip_spans.push(value_span(value));
        chip_spans.push(Span::styled("]", DIM_STYLE));
    }
    lines.push(Line::from(chip_spans));
    lines.push(Line::default());

    // Terminal window chrome
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(RED)),
        Span::styled("● ", Style::default().fg(YELLOW)),
        Span::styled("● ", Style::default().fg(GREEN)),
        Span::styled(labels.hero.terminal_user.to_string(), DIM_STYLE),
    ]));

    // Prompt line with the typewriter cursor
    let mut prompt = vec![
        Span::styled("❯ ", Style::default().fg(OPERATIONAL)),
        Span::raw(hero.typed().to_string()),
    ];
    let cursor_visible = matches!(hero.phase, HeroPhase::Idle | HeroPhase::Typing) && (ticks / 4) % 2 == 0;
    if cursor_visible {
        prompt.push(Span::styled("▌", Style::default().fg(OPERATIONAL)));
    }
    lines.push(Line::from(prompt));

    match hero.phase {
        HeroPhase::Executing => {
            let frame = SPINNER_FRAMES[ticks as usize % SPINNER_FRAMES.len()];
            lines.push(Line::from(vec![
                Span::styled(format!("{frame} "), Style::default().fg(YELLOW)),
                Span::styled(labels.hero.loading_profile.to_string(), DIM_STYLE),
            ]));
        }
        HeroPhase::Output | HeroPhase::Done => {
            if hero.show_raw_json {
                lines.extend(json_lines(&HeroModel::profile_json(resume)));
            } else {
                lines.push(Line::from(vec![
                    Span::styled("$ ".to_string(), DIM_STYLE),
                    Span::styled(
                        labels.hero.recruiter_command.to_string(),
                        Style::default().fg(OPERATIONAL),
                    ),
                ]));
                let quick = [
                    (labels.hero.quick_role, resume.profile.role.clone()),
                    (
                        labels.hero.quick_impact,
                        resume
                            .metrics
                            .first()
                            .map(|m| format!("{} {}", m.value, m.label))
                            .unwrap_or_default(),
                    ),
                    (
                        labels.hero.quick_reliability,
                        resume
                            .metrics
                            .get(1)
                            .map(|m| format!("{} {}", m.value, m.label))
                            .unwrap_or_default(),
                    ),
                    (labels.hero.quick_location, resume.profile.location.clone()),
                ];
                for (label, value) in quick {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {label}: "), DIM_STYLE),
                        Span::raw(value),
                    ]));
                }
                lines.push(Line::from(Span::styled(
                    resume.profile.tagline.clone(),
                    Style::default().fg(ACCENT).add_modifier(Modifier::ITALIC),
                )));
            }

            // Footer hints; the copied acknowledgment replaces the copy hint
            let json_hint = if hero.show_raw_json {
                labels.hero.hide_json
            } else {
                labels.hero.show_json
            };
            let copy_hint = if hero.is_copied() {
                Span::styled(
                    format!("✓ {}", labels.hero.output_copied),
                    Style::default().fg(OPERATIONAL),
                )
            } else {
                Span::styled(format!("[y] {}", labels.hero.copy_output), DIM_STYLE)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("[v] {json_hint}  "), DIM_STYLE),
                copy_hint,
            ]));
        }
        _ => {
            lines.push(Line::from(Span::styled(
                format!("[s] {}", labels.hero.skip),
                DIM_STYLE,
            )));
        }
    }

    lines
}

/// Minimal JSON coloring: keys in the accent color, everything after the
/// first colon in the operational green.
fn json_lines(json: &str) -> Vec<Line<'static>> {
    json.lines()
        .map(|line| match line.split_once(':') {
            Some((key, rest)) => Line::from(vec![
                Span::styled(key.to_string(), Style::default().fg(ACCENT)),
                Span::styled(":".to_string(), DIM_STYLE),
                Span::styled(rest.to_string(), Style::default().fg(OPERATIONAL)),
            ]),
            None => Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(WHITE),
            )),
        })
        .collect()
}

fn trend_span(trend: MetricTrend, labels: &'static UiLabels) -> Span<'static> {
    match trend {
        MetricTrend::Up => Span::styled(
            format!("▲ {}", labels.metrics.trend_up),
            Style::default().fg(OPERATIONAL),
        ),
        MetricTrend::Stable => Span::styled(
            format!("● {}", labels.metrics.trend_stable),
            Style::default().fg(ACCENT),
        ),
        MetricTrend::Processing => Span::styled(
            format!("… {}", labels.metrics.trend_processing),
            Style::default().fg(YELLOW),
        ),
    }
}

fn metrics_lines(
    resume: &ResumeData,
    labels: &'static UiLabels,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow_line(labels.metrics.eyebrow),
        title_line(labels.metrics.title),
    ];
    lines.extend(description_lines(labels.metrics.description, width));
    lines.push(Line::default());

    for metric in &resume.metrics {
        lines.push(Line::from(vec![
            value_span(format!("{:>9}", metric.value)),
            Span::raw("  "),
            Span::raw(metric.label.clone()),
            Span::raw("  "),
            trend_span(metric.trend, labels),
        ]));
    }

    lines.push(Line::default());
    lines.push(title_line(labels.metrics.case_studies_title));
    lines.extend(description_lines(labels.metrics.case_studies_description, width));

    for case in &resume.impact_cases {
        lines.push(Line::default());
        lines.push(Line::from(bold_white(case.title.clone())));
        lines.push(Line::from(Span::styled(case.context.clone(), DIM_STYLE)));
        for (label, text) in [
            (labels.metrics.challenge_label, &case.challenge),
            (labels.metrics.action_label, &case.action),
            (labels.metrics.result_label, &case.result),
        ] {
            let style = if label == labels.metrics.result_label {
                Style::default().fg(OPERATIONAL)
            } else {
                Style::default().fg(WHITE)
            };
            let mut first = true;
            for wrapped in wrap_text(text, width.saturating_sub(12)) {
                if first {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {label:>9}  "), DIM_STYLE),
                        Span::styled(wrapped, style),
                    ]));
                    first = false;
                } else {
                    lines.push(Line::from(vec![
                        Span::raw(" ".repeat(13)),
                        Span::styled(wrapped, style),
                    ]));
                }
            }
        }
        let mut stack_spans = vec![Span::styled(
            format!("  {:>9}  ", labels.metrics.stack_label),
            DIM_STYLE,
        )];
        stack_spans.extend(tag_line("", &case.stack).spans.into_iter().skip(1));
        lines.push(Line::from(stack_spans));
    }

    lines
}

fn experience_lines(
    resume: &ResumeData,
    labels: &'static UiLabels,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow_line(labels.experience.eyebrow),
        title_line(labels.experience.title),
    ];
    lines.extend(description_lines(labels.experience.description, width));

    for item in &resume.experience {
        lines.push(Line::default());
        let bullet_color = if item.is_current { OPERATIONAL } else { BRIGHT_BLACK };
        let mut heading = vec![
            Span::styled("● ".to_string(), Style::default().fg(bullet_color)),
            bold_white(item.company.clone()),
            Span::raw(" — "),
            Span::raw(item.role.clone()),
        ];
        if item.is_current {
            heading.push(Span::raw(" "));
            heading.push(Span::styled(
                format!("[{}]", labels.experience.active),
                Style::default().fg(OPERATIONAL).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(heading));
        lines.push(Line::from(Span::styled(
            format!("  {}", item.period),
            DIM_STYLE,
        )));
        for achievement in &item.achievements {
            let mut first = true;
            for wrapped in wrap_text(achievement, width.saturating_sub(4)) {
                let prefix = if first { "  - " } else { "    " };
                first = false;
                lines.push(Line::from(vec![
                    Span::styled(prefix.to_string(), DIM_STYLE),
                    Span::raw(wrapped),
                ]));
            }
        }
    }

    lines
}

fn education_lines(resume: &ResumeData, labels: &'static UiLabels) -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow_line(labels.education.eyebrow),
        title_line(labels.education.title),
    ];
    lines.push(Line::from(Span::styled(
        labels.education.description.to_string(),
        DIM_STYLE,
    )));

    for item in &resume.education {
        lines.push(Line::default());
        lines.push(Line::from(bold_white(item.degree.clone())));
        lines.push(Line::from(Span::raw(item.institution.clone())));
        lines.push(Line::from(Span::styled(item.faculty.clone(), DIM_STYLE)));
        lines.push(Line::from(Span::styled(
            format!("{} · {}", item.location, item.period),
            DIM_STYLE,
        )));
    }

    lines
}

fn skills_lines(resume: &ResumeData, labels: &'static UiLabels, width: u16) -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow_line(labels.skills.eyebrow),
        title_line(labels.skills.title),
    ];
    lines.extend(description_lines(labels.skills.description, width));

    let categories: [(&'static str, &Vec<String>, bool); 4] = [
        (labels.skills.core, &resume.skills.core, false),
        (labels.skills.dev, &resume.skills.dev, false),
        (labels.skills.observability, &resume.skills.observability, false),
        (labels.skills.learning, &resume.skills.learning, true),
    ];

    for (category, skills, in_progress) in categories {
        lines.push(Line::default());
        let badge = if in_progress {
            Span::styled(
                format!(" {}", labels.skills.compiling),
                Style::default().fg(YELLOW),
            )
        } else {
            Span::styled(
                format!(" {}", labels.skills.stable),
                Style::default().fg(OPERATIONAL),
            )
        };
        lines.push(Line::from(vec![bold_white(category), badge]));
        lines.push(tag_line("  ", skills));
    }

    lines
}

fn contact_lines(
    resume: &ResumeData,
    labels: &'static UiLabels,
    contact: &ContactModel,
    width: u16,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        eyebrow_line(labels.contact.eyebrow),
        title_line(labels.contact.title),
    ];
    lines.extend(description_lines(labels.contact.description, width));
    lines.push(Line::default());

    let email_state = if contact.is_copied() {
        Span::styled(
            format!("✓ {}", labels.contact.copied),
            Style::default().fg(OPERATIONAL),
        )
    } else {
        Span::styled("[c]".to_string(), DIM_STYLE)
    };
    lines.push(Line::from(vec![
        Span::styled("✉ ".to_string(), Style::default().fg(ACCENT)),
        Span::raw(resume.profile.email.clone()),
        Span::raw("  "),
        email_state,
    ]));
    lines.push(Line::from(vec![
        Span::styled("▣ ".to_string(), Style::default().fg(ACCENT)),
        Span::raw(format!("{} — {}", labels.contact.linkedin, resume.profile.linkedin)),
        Span::raw("  "),
        Span::styled("[o]".to_string(), DIM_STYLE),
    ]));

    lines
}
