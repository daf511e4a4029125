//! Pure HTML fragment rendering. No I/O, no state: identical reports
//! produce identical markup, so the handler can be tested without any
//! HTML assertions here and vice versa.

use crate::application::dto::DiagnosisReport;

fn item_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{item}</li>"))
        .collect()
}

/// Render the diagnosis result card.
pub fn result_card(report: &DiagnosisReport) -> String {
    let confidence = format!("{:.2}", report.prediction.confidence);

    let prob_rows: String = report
        .rows
        .iter()
        .map(|row| {
            format!(
                "\n                <li class='d-flex justify-content-between border-bottom py-1'>\
                 \n                    <span>{}</span> <strong>{:.2}%</strong>\
                 \n                </li>",
                row.name, row.percent
            )
        })
        .collect();

    format!(
        r#"
    <div class="card result-card shadow-lg mt-4 animate__animated animate__fadeInUp">
        <div class="result-header text-center">
            <span class="badge rounded-pill bg-success mb-2 px-3 py-2 text-uppercase">{badge}</span>
            <h2 class="fw-bold text-success mb-0">🍎 {disease}</h2>
            <p class="text-center text-muted mb-0"><b>{confidence}%</b> {match_label}</p>
        </div>
        <div class="card-body p-4">
            <div class="progress mb-4" style="height: 12px; border-radius: 10px;">
                <div class="progress-bar progress-bar-striped progress-bar-animated bg-success" role="progressbar" style="width: {confidence}%"></div>
            </div>
            <div class="row">
                <div class="col-12 mb-4">
                    <div class="p-3 rounded-4" style="background-color: rgba(59, 130, 246, 0.1); border-left: 5px solid #3b82f6;">
                        <h5 class="fw-bold text-primary mb-3">📋 {prec_header}</h5>
                        <ul class="info-list mb-0">{precautions}</ul>
                    </div>
                </div>
                <div class="col-md-6 mb-3">
                    <div class="p-3 h-100 rounded-4" style="background-color: rgba(34, 197, 94, 0.1); border-left: 5px solid #22c55e;">
                        <h5 class="fw-bold text-success mb-3">🌿 {fert_header}</h5>
                        <ul class="info-list mb-0">{fertilizers}</ul>
                    </div>
                </div>
                <div class="col-md-6 mb-3">
                    <div class="p-3 h-100 rounded-4" style="background-color: rgba(239, 68, 68, 0.1); border-left: 5px solid #ef4444;">
                        <h5 class="fw-bold text-danger mb-3">🧪 {pest_header}</h5>
                        <ul class="info-list mb-0">{pesticides}</ul>
                    </div>
                </div>
            </div>
            <hr>
            <div class="p-3 rounded-4" style="background-color: rgba(128, 128, 128, 0.1);">
                <h5 class="fw-bold mb-3">{prob_header}</h5>
                <ul class="list-unstyled mb-0">{prob_rows}</ul>
            </div>
        </div>
    </div>
    "#,
        badge = report.ui.analysis_badge,
        disease = report.advice.disease,
        confidence = confidence,
        match_label = report.ui.match_label,
        prec_header = report.ui.headers.prec,
        precautions = item_list(&report.advice.precautions),
        fert_header = report.ui.headers.fert,
        fertilizers = item_list(&report.advice.fertilizers),
        pest_header = report.ui.headers.pest,
        pesticides = item_list(&report.advice.pesticides),
        prob_header = report.ui.prob_header,
        prob_rows = prob_rows,
    )
}

/// Render the user-visible error fragment. The message must already be
/// sanitized; raw error causes belong in the log, not here.
pub fn error_fragment(message: &str) -> String {
    format!("<div class='alert alert-danger'>Error: {message}</div>")
}
