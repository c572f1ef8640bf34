//! Natural-language rendering of a [`Trace`].
//!
//! The engine only produces structured records; phrasing lives here so it can change (or be
//! translated) without touching the algorithm.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Display;

use itertools::Itertools;

use crate::trace::{Iteration, Trace};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Russian,
}

struct Phrases {
    step: &'static str,
    found: &'static str,
    path: &'static str,
    bottleneck: &'static str,
    updating: &'static str,
    edge: &'static str,
    increased_to: &'static str,
    added: &'static str,
    total: &'static str,
    max_flow: &'static str,
}

const ENGLISH: Phrases = Phrases {
    step: "Step",
    found: "augmenting path found",
    path: "Augmenting path",
    bottleneck: "Bottleneck capacity along the path",
    updating: "Updating flows in the network:",
    edge: "Flow on edge",
    increased_to: "increased to",
    added: "Added to total flow",
    total: "Current maximum flow",
    max_flow: "Maximum flow",
};

const RUSSIAN: Phrases = Phrases {
    step: "Шаг",
    found: "Найдена увеличивающая цепь",
    path: "Увеличивающая цепь",
    bottleneck: "Минимальная пропускная способность вдоль пути",
    updating: "Обновляем потоки в сети:",
    edge: "Поток на ребре",
    increased_to: "увеличен до",
    added: "Добавлено в общий поток",
    total: "Текущий максимальный поток",
    max_flow: "Максимальный поток",
};

impl Language {
    fn phrases(self) -> &'static Phrases {
        match self {
            Language::English => &ENGLISH,
            Language::Russian => &RUSSIAN,
        }
    }

    /// One-line summary of the final result.
    pub fn summary<A: Display>(self, max_flow: A) -> String {
        format!("{}: {max_flow}", self.phrases().max_flow)
    }
}

/// Renders every iteration of `trace` as consecutive lines.
pub fn render<A: Display>(trace: &Trace<A>, language: Language) -> Vec<String> {
    trace
        .iter()
        .flat_map(|iteration| render_iteration(iteration, language))
        .collect()
}

pub fn render_iteration<A: Display>(iteration: &Iteration<A>, language: Language) -> Vec<String> {
    let p = language.phrases();
    let mut lines = Vec::with_capacity(iteration.updates.len() + 6);

    lines.push(format!("{} {}: {}", p.step, iteration.step, p.found));
    lines.push(format!("{}: {}", p.path, iteration.path.iter().join(" -> ")));
    lines.push(format!("{}: {}", p.bottleneck, iteration.bottleneck));
    lines.push(String::from(p.updating));
    lines.extend(iteration.updates.iter().map(|u| {
        format!(
            "  {} {} -> {} {} {}",
            p.edge, u.from, u.to, p.increased_to, u.flow
        )
    }));
    lines.push(format!("{}: {}", p.added, iteration.added));
    lines.push(format!("{}: {}", p.total, iteration.total));

    lines
}
