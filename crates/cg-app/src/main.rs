//! Main application entry point

use std::sync::Arc;

use ahash::AHashMap;
use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::info;

use cg_core::{NavEvent, SectionEngine, SectionRegistry, VisibilityObserver};
use cg_ui::{
    apply_theme, footer, ContactForm, FooterAction, HeaderAction, HeaderBar, Language, Theme,
    LANGUAGE_STORAGE_KEY,
};

mod scroll;
mod sections;

use scroll::SmoothScroll;

/// Ordered sections of the single page
fn section_registry() -> SectionRegistry {
    SectionRegistry::new(["home", "about", "church-life", "contact"])
}

/// Main application state
struct SiteApp {
    /// Display language, persisted across sessions
    language: Language,

    /// Single source of truth for the active section
    engine: Arc<SectionEngine>,

    /// Scroll-driven section tracking
    observer: VisibilityObserver,

    /// Sticky header with nav and underline
    header: HeaderBar,

    /// Contact form state
    contact_form: ContactForm,

    /// Click-driven scroll animation
    scroll: SmoothScroll,

    /// Content-space rects of the mounted sections, rebuilt every frame
    regions: AHashMap<String, egui::Rect>,

    /// Scroll offset of the page content as of the last frame
    scroll_offset: f32,

    last_viewport: egui::Vec2,
}

impl SiteApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());

        let language = Language::from_preference(
            cc.storage
                .and_then(|storage| storage.get_string(LANGUAGE_STORAGE_KEY))
                .as_deref(),
        );
        info!(language = language.as_str(), "restored display language");

        let registry = section_registry();
        let engine = Arc::new(SectionEngine::new(registry.clone()));
        let observer = VisibilityObserver::new(registry, engine.clone());
        let header = HeaderBar::new(engine.clone());

        Self {
            language,
            engine,
            observer,
            header,
            contact_form: ContactForm::default(),
            scroll: SmoothScroll::default(),
            regions: AHashMap::new(),
            scroll_offset: 0.0,
            last_viewport: egui::Vec2::ZERO,
        }
    }

    fn navigate(&mut self, id: &str, now: f64) {
        if let Some(request) = self.engine.navigate_and_scroll(id, &self.regions) {
            self.scroll
                .begin(self.scroll_offset, request.target_offset, now, request.behavior);
        }
    }

    fn set_language(&mut self, language: Language) {
        if language != self.language {
            info!(language = language.as_str(), "switching display language");
            self.language = language;
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        let viewport = ctx.screen_rect().size();
        if viewport != self.last_viewport {
            self.last_viewport = viewport;
            self.engine.handle_event(NavEvent::ViewportResized);
        }

        let header_actions = self.header.show(ctx, self.language);

        let scroll_target = self.scroll.offset_at(now);
        if self.scroll.is_animating() {
            ctx.request_repaint();
        }

        let strings = self.language.strings();
        let mut nav_requests: Vec<String> = Vec::new();
        let mut viewport_height = viewport.y;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(cg_ui::theme::PAGE_BG))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical().auto_shrink([false; 2]);
                if let Some(offset) = scroll_target {
                    area = area.vertical_scroll_offset(offset);
                }

                let output = area.show(ui, |ui| {
                    let content_top = ui.next_widget_position().y;
                    let to_content = |rect: egui::Rect| rect.translate(egui::vec2(0.0, -content_top));
                    self.regions.clear();

                    let (rect, target) = sections::hero::show(ui, &strings.hero);
                    self.regions.insert("home".to_string(), to_content(rect));
                    if let Some(target) = target {
                        nav_requests.push(target.to_string());
                    }

                    let rect = sections::about::show(ui, &strings.about);
                    self.regions.insert("about".to_string(), to_content(rect));

                    let rect = sections::church_life::show(ui, &strings.church_life);
                    self.regions
                        .insert("church-life".to_string(), to_content(rect));

                    let rect = sections::contact::show(
                        ui,
                        &strings.contact,
                        &mut self.contact_form,
                        now,
                    );
                    self.regions.insert("contact".to_string(), to_content(rect));

                    for action in footer(ui, &strings.footer, &strings.header) {
                        match action {
                            FooterAction::Navigate(id) => nav_requests.push(id),
                        }
                    }
                });

                self.scroll_offset = output.state.offset.y;
                viewport_height = output.inner_rect.height();
            });

        // Scroll-driven activation first; clicks from this frame override it
        self.observer
            .evaluate(self.scroll_offset, viewport_height, &self.regions);

        for action in header_actions {
            match action {
                HeaderAction::Navigate(id) => self.navigate(&id, now),
                HeaderAction::SetLanguage(language) => self.set_language(language),
            }
        }
        for id in nav_requests {
            self.navigate(&id, now);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(LANGUAGE_STORAGE_KEY, self.language.as_str().to_string());
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.observer.detach();
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Christliche Gemeinde International site");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Christliche Gemeinde International e.V.",
        options,
        Box::new(|cc| Box::new(SiteApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
