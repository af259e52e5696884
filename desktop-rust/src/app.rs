use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};

use review_ai_common::layout::{
    APP_NAME_PROMPT, BUSY_LABEL, METADATA_HEADING, PAGE_TITLE, REVIEW_PROMPT, SUBMIT_LABEL,
    SUGGESTIONS_HEADING,
};
use review_ai_common::{METADATA_FIELDS, ReviewQuery, SentimentTable, is_submittable, wrap_for_display};
use review_ai_rust::ReviewOrchestrator;
use review_ai_rust::config::Config;
use review_ai_rust::inference::HfInferenceClient;

use crate::io::Startup;
use crate::model::{FormState, ReportPart, ReportView};

pub struct ReviewApp {
    form: FormState,
    config: Option<Config>,
    table: Option<Arc<SentimentTable>>,
    startup_error: Option<String>,
    report: Option<ReportView>,
    error: Option<String>,
    analyze_rx: Option<Receiver<UiMessage>>,
    analyzing: bool,
}

enum UiMessage {
    Part(ReportPart),
    AnalyzeDone(Result<ReportView, String>),
}

impl ReviewApp {
    pub fn new(startup: anyhow::Result<Startup>) -> Self {
        let (config, table, startup_error) = match startup {
            Ok(s) => (Some(s.config), Some(s.table), None),
            Err(err) => (None, None, Some(format!("{err:#}"))),
        };
        Self {
            form: FormState::default(),
            config,
            table,
            startup_error,
            report: None,
            error: None,
            analyze_rx: None,
            analyzing: false,
        }
    }

    fn can_submit(&self) -> bool {
        !self.analyzing
            && self.table.is_some()
            && is_submittable(&self.form.app_name, &self.form.review_text)
    }

    fn run_analyze(&mut self) {
        let (Some(config), Some(table)) = (self.config.clone(), self.table.clone()) else {
            return;
        };
        let Some(query) = ReviewQuery::new(&self.form.app_name, &self.form.review_text) else {
            return;
        };

        let (tx, rx) = mpsc::channel();
        self.analyze_rx = Some(rx);
        self.analyzing = true;
        self.error = None;
        self.report = Some(ReportView::for_app(query.app_name()));

        std::thread::spawn(move || run_worker(config, table, query, tx));
    }

    fn poll_messages(&mut self) {
        let Some(rx) = &self.analyze_rx else {
            return;
        };

        let mut finished = false;
        while let Ok(msg) = rx.try_recv() {
            match msg {
                UiMessage::Part(part) => {
                    if let Some(report) = &mut self.report {
                        report.apply(part);
                    }
                }
                UiMessage::AnalyzeDone(Ok(report)) => {
                    self.report = Some(report);
                    finished = true;
                }
                UiMessage::AnalyzeDone(Err(message)) => {
                    self.error = Some(message);
                    finished = true;
                }
            }
        }

        if finished {
            self.analyzing = false;
            self.analyze_rx = None;
        }
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.label(APP_NAME_PROMPT);
        ui.add(egui::TextEdit::singleline(&mut self.form.app_name).desired_width(f32::INFINITY));
        ui.add_space(6.0);

        ui.label(REVIEW_PROMPT);
        ui.add(
            egui::TextEdit::multiline(&mut self.form.review_text)
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.add_enabled(self.can_submit(), egui::Button::new(SUBMIT_LABEL)).clicked() {
                self.run_analyze();
            }
            if self.analyzing {
                ui.spinner();
                ui.label(RichText::new(BUSY_LABEL).color(Color32::from_gray(170)));
            }
        });
    }

    fn render_report(&self, ui: &mut egui::Ui) {
        let Some(report) = &self.report else {
            return;
        };

        ui.heading(format!("📊 {METADATA_HEADING}"));
        egui::Grid::new("metadata_grid")
            .striped(true)
            .min_col_width(120.0)
            .show(ui, |ui| {
                for field in METADATA_FIELDS {
                    let Some(value) = report.metadata_value(*field) else {
                        continue;
                    };
                    ui.label(RichText::new(field.label()).strong());
                    if field.wraps() {
                        ui.label(RichText::new(wrap_for_display(value)).monospace());
                    } else {
                        ui.label(value);
                    }
                    ui.end_row();
                }
            });

        if let Some(suggestions) = &report.suggestions {
            ui.add_space(12.0);
            ui.heading(format!("🔧 {SUGGESTIONS_HEADING}"));
            ui.label(RichText::new(wrap_for_display(suggestions)).monospace());
        }
    }
}

fn run_worker(config: Config, table: Arc<SentimentTable>, query: ReviewQuery, tx: Sender<UiMessage>) {
    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(err) => {
            let _ = tx.send(UiMessage::AnalyzeDone(Err(format!("Analyze failed: {err}"))));
            return;
        }
    };

    let client = HfInferenceClient::from_config(&config);
    let orchestrator = ReviewOrchestrator::new(&table, client);
    let result = runtime.block_on(orchestrator.analyze_with_progress(&query, |progress| {
        let _ = tx.send(UiMessage::Part(progress.into()));
    }));

    let message = match result {
        Ok(report) => UiMessage::AnalyzeDone(Ok(report.into())),
        Err(err) => {
            log::error!("analyze failed: {err}");
            UiMessage::AnalyzeDone(Err(format!("Analyze failed: {err}")))
        }
    };
    let _ = tx.send(message);
}

pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let candidates = [
        r"C:\Windows\Fonts\meiryo.ttc",
        r"C:\Windows\Fonts\msgothic.ttc",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];

    for path in candidates {
        if let Ok(data) = std::fs::read(path) {
            fonts.font_data.insert("cjk_fallback".to_string(), FontData::from_owned(data));
            // 英字は既定フォントのまま、CJKのみフォールバック
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .push("cjk_fallback".to_string());
            fonts.families
                .entry(FontFamily::Monospace)
                .or_default()
                .push("cjk_fallback".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
}

impl eframe::App for ReviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.analyzing {
            ctx.request_repaint();
        }
        self.poll_messages();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("📱 {PAGE_TITLE}"));
            ui.separator();

            if let Some(err) = &self.startup_error {
                ui.label(RichText::new(format!("Startup failed: {err}")).color(Color32::from_rgb(230, 90, 90)));
                ui.separator();
            }

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                self.render_form(ui);
                ui.add_space(12.0);

                if let Some(err) = &self.error {
                    ui.label(RichText::new(err).color(Color32::from_rgb(230, 90, 90)));
                    ui.add_space(8.0);
                }

                self.render_report(ui);
            });
        });
    }
}
