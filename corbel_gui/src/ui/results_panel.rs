//! Results Panel (Right Side)
//!
//! Shows, for the last submitted input:
//! - Pass/Fail verdict
//! - Lever arm, design moment, maximum resisting moment
//! - The formulas behind them, from the equation registry
//! - The corbel diagram
//!
//! An invalid submission shows the error instead.

use iced::widget::{column, container, scrollable, text, Canvas, Column, Space};
use iced::{Element, Length};

use corbel_core::diagram::CorbelSketch;
use corbel_core::equations::ALL_EQUATIONS;
use corbel_core::report::ResultSummary;

use super::shared::diagrams::CorbelDiagram;
use crate::{App, Evaluation, Message};

/// Render the results panel
///
/// The `input_ratio` parameter is the ratio used by the input panel.
/// This panel uses the complementary ratio (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error_message {
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let Some(ref evaluation) = app.evaluation {
        view_evaluation(evaluation)
    } else {
        column![text("Press 'Run calculation' to check the corbel").size(14).color([0.5, 0.5, 0.5])]
    };

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_evaluation(evaluation: &Evaluation) -> Column<'_, Message> {
    let summary = ResultSummary::new(&evaluation.input, &evaluation.result);

    let verdict = if summary.verified {
        text(summary.verdict).size(16).color([0.2, 0.6, 0.2])
    } else {
        text(summary.verdict).size(16).color([0.8, 0.2, 0.2])
    };

    let lines = summary
        .results
        .iter()
        .fold(Column::new().spacing(4), |col, line| col.push(text(line.render()).size(12)));

    let utilization = text(format!("Md / Rd,max = {:.2}", evaluation.result.utilization()))
        .size(11)
        .color([0.5, 0.5, 0.5]);

    let formulas = ALL_EQUATIONS.iter().fold(Column::new().spacing(2), |col, equation| {
        let meta = equation.metadata();
        col.push(
            text(format!("{}: {}", meta.name, meta.formula_plain))
                .size(10)
                .color([0.5, 0.5, 0.5]),
        )
    });

    let diagram = CorbelDiagram::new(CorbelSketch::from_input(&evaluation.input));
    let canvas_widget: Element<'_, Message> = Canvas::new(diagram)
        .width(Length::Fill)
        .height(Length::Fixed(320.0))
        .into();

    column![
        text(format!("Results - {}", summary.title)).size(14),
        Space::new().height(8),
        verdict,
        Space::new().height(8),
        lines,
        utilization,
        Space::new().height(10),
        formulas,
        Space::new().height(15),
        text("Diagram").size(14),
        Space::new().height(8),
        canvas_widget,
    ]
}
