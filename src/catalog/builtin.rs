//! The authored default catalog: four eras of interface design.

use crate::catalog::era::{DecorKind, DecorNote, EraCatalog, EraRecord, FactEntry, StyleKind};

fn note(kind: DecorKind, body: &str) -> DecorNote {
    DecorNote {
        kind,
        body: body.to_string(),
    }
}

fn fact(headline: &str, body: &str) -> FactEntry {
    FactEntry {
        headline: headline.to_string(),
        body: body.to_string(),
    }
}

/// The authored four-era catalog shipped with the crate.
///
/// Always valid; the records are compiled in with contiguous ids.
#[must_use]
pub fn builtin() -> EraCatalog {
    let eras = vec![
        EraRecord {
            id: 0,
            label: "1980s".to_string(),
            title: "Early GUI".to_string(),
            summary: "The Macintosh and Windows 1.0 arrived, and the age of \
                      icons and windows began."
                .to_string(),
            style: StyleKind::Retro,
            decor_notes: vec![
                note(
                    DecorKind::Button,
                    "Buttons were hard rectangles with inset bevels, drawn in \
                     whatever two colors the display could afford. Labels were \
                     terse and monospaced because the font was the system font.",
                ),
                note(
                    DecorKind::Input,
                    "Text entry still looked like the command line it replaced: \
                     a block cursor blinking after a drive-letter prompt, now \
                     framed inside a window.",
                ),
            ],
            facts: vec![fact(
                "The desktop metaphor",
                "Files, folders, and a trash can gave newcomers a physical \
                 vocabulary for an abstract machine. Most of it survives \
                 unchanged four decades later.",
            )],
        },
        EraRecord {
            id: 1,
            label: "2000s".to_string(),
            title: "Web 2.0".to_string(),
            summary: "Skeuomorphism and rich interfaces took over, and the web \
                      dressed itself in gloss and gradients."
                .to_string(),
            style: StyleKind::Glossy,
            decor_notes: vec![
                note(
                    DecorKind::Button,
                    "The pill button with a white-to-gray gradient and a drop \
                     shadow was everywhere. Every candy-colored call to action \
                     wanted to look pressable enough to click twice.",
                ),
                note(
                    DecorKind::Input,
                    "Search fields went rounded and glassy, with inner shadows \
                     suggesting a groove cut into the page.",
                ),
            ],
            facts: vec![
                fact(
                    "Skeuomorphism",
                    "Interfaces imitated leather, brushed metal, and glass so \
                     users could lean on real-world intuition. Calendar apps \
                     shipped with stitched borders.",
                ),
                fact(
                    "The gradient decade",
                    "CSS could not yet draw gradients, so the shine was sliced \
                     PNGs tiled across a million buttons.",
                ),
            ],
        },
        EraRecord {
            id: 2,
            label: "2010s".to_string(),
            title: "The flat turn".to_string(),
            summary: "Ornament fell out of fashion; interfaces flattened into \
                      solid colors, plain type, and whitespace."
                .to_string(),
            style: StyleKind::Flat,
            decor_notes: vec![
                note(
                    DecorKind::Button,
                    "A flat rectangle of saturated blue with white text. No \
                     bevel, no gradient; affordance carried by color and \
                     convention alone.",
                ),
                note(
                    DecorKind::Input,
                    "A light gray box with a thin border. The visual noise of \
                     the previous decade was stripped to the minimum that \
                     still read as editable.",
                ),
            ],
            facts: vec![fact(
                "Flat design",
                "iOS 7 and Material Design pushed the whole industry flat \
                 within two years. Critics said buttons stopped looking like \
                 buttons; the market did not care.",
            )],
        },
        EraRecord {
            id: 3,
            label: "2020s".to_string(),
            title: "Flat & dark mode".to_string(),
            summary: "Simple, minimal design matured, and accessibility-first \
                      dark modes became the norm."
                .to_string(),
            style: StyleKind::Flat,
            decor_notes: vec![
                note(
                    DecorKind::Button,
                    "Soft indigo-to-purple gradients returned in moderation, \
                     with focus rings for keyboard users built in rather than \
                     bolted on.",
                ),
                note(
                    DecorKind::Input,
                    "Muted purple fills on dark surfaces, tuned for contrast \
                     ratios instead of shine.",
                ),
            ],
            facts: vec![
                fact(
                    "Dark mode everywhere",
                    "Once a developer-tool affectation, dark themes became a \
                     system-level toggle honored by every major platform.",
                ),
                fact(
                    "Accessibility as default",
                    "Contrast guidelines and reduced-motion preferences moved \
                     from audit checklists into the design systems themselves.",
                ),
            ],
        },
    ];
    EraCatalog::new(eras).unwrap_or_else(|err| {
        unreachable!("builtin catalog is authored valid: {err}");
    })
}
