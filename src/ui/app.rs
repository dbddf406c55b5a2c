use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::carousel::Carousel;
use crate::catalog::{daily_deals, deals_banners, trending_slides, DealItem};
use crate::config::{Config, ConfigStore};
use crate::error::ConfigurationError;
use crate::listing::PagedList;
use crate::preferences::communication::{
    CommunicationDialogState, CommunicationIntent, CommunicationPreference, CommunicationReducer,
};
use crate::preferences::payment_form::{PaymentFormIntent, PaymentFormReducer, PaymentFormState};
use crate::preferences::save::{SaveIntent, SaveReducer, SaveState};
use crate::preferences::saved_cards::{SavedCardsIntent, SavedCardsReducer, SavedCardsState};
use crate::preferences::{
    save_with_timeout, PaymentPreference, PreferenceService, SavedCard, ServiceError,
};
use crate::ui::events::{AppEvent, CarouselId, PaymentFormData, SavedCardsData};
use crate::ui::mvi::Reducer;

/// How long the UI waits for the account service before offering a retry.
const SAVE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    DealsBanner,
    TrendingHero,
    DailyDeals,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::DealsBanner => Focus::TrendingHero,
            Focus::TrendingHero => Focus::DailyDeals,
            Focus::DailyDeals => Focus::DealsBanner,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::DealsBanner => Focus::DailyDeals,
            Focus::TrendingHero => Focus::DealsBanner,
            Focus::DailyDeals => Focus::TrendingHero,
        }
    }

    fn carousel(self) -> Option<CarouselId> {
        match self {
            Focus::DealsBanner => Some(CarouselId::DealsBanner),
            Focus::TrendingHero => Some(CarouselId::TrendingHero),
            Focus::DailyDeals => None,
        }
    }
}

/// Popups that open after an asynchronous load.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Overlay {
    PaymentForm,
    Communication,
    SavedCards,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    }};
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    size: Option<(u16, u16)>,
    config: ConfigStore,
    deals_banner: Carousel,
    trending_hero: Carousel,
    daily_deals: PagedList<DealItem>,
    payment_form: PaymentFormState,
    payment_save: SaveState,
    /// Last submitted record, kept for retries.
    pending_payment: Option<PaymentPreference>,
    communication: CommunicationDialogState,
    communication_save: SaveState,
    saved_cards: SavedCardsState,
    /// Popup whose data is being fetched. At most one popup is open or
    /// loading at a time.
    loading: Option<Overlay>,
    service: Arc<dyn PreferenceService>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
    status: Option<String>,
}

struct Storefront {
    deals_banner: Carousel,
    trending_hero: Carousel,
    daily_deals: PagedList<DealItem>,
}

fn build_storefront(config: &Config) -> Result<Storefront, ConfigurationError> {
    let policy = config.carousel.manual_navigation;
    Ok(Storefront {
        deals_banner: Carousel::new("Best Deals", deals_banners(), config.carousel.deals_interval())?
            .with_manual_navigation(policy),
        trending_hero: Carousel::new(
            "Trending",
            trending_slides(),
            config.carousel.trending_interval(),
        )?
        .with_manual_navigation(policy),
        daily_deals: PagedList::new(daily_deals(), config.listing.page_size)?,
    })
}

impl App {
    pub fn new(
        config: ConfigStore,
        service: Arc<dyn PreferenceService>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Result<Self, ConfigurationError> {
        let storefront = build_storefront(&config.get())?;
        Ok(Self {
            should_quit: false,
            focus: Focus::DealsBanner,
            size: None,
            config,
            deals_banner: storefront.deals_banner,
            trending_hero: storefront.trending_hero,
            daily_deals: storefront.daily_deals,
            payment_form: PaymentFormState::default(),
            payment_save: SaveState::default(),
            pending_payment: None,
            communication: CommunicationDialogState::default(),
            communication_save: SaveState::default(),
            saved_cards: SavedCardsState::default(),
            loading: None,
            service,
            runtime,
            events,
            status: None,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn assets_dir(&self) -> Option<PathBuf> {
        self.config.get().assets.dir
    }

    pub fn carousel(&self, id: CarouselId) -> &Carousel {
        match id {
            CarouselId::DealsBanner => &self.deals_banner,
            CarouselId::TrendingHero => &self.trending_hero,
        }
    }

    fn carousel_mut(&mut self, id: CarouselId) -> &mut Carousel {
        match id {
            CarouselId::DealsBanner => &mut self.deals_banner,
            CarouselId::TrendingHero => &mut self.trending_hero,
        }
    }

    pub fn daily_deals(&self) -> &PagedList<DealItem> {
        &self.daily_deals
    }

    pub fn payment_form(&self) -> &PaymentFormState {
        &self.payment_form
    }

    pub fn payment_save(&self) -> &SaveState {
        &self.payment_save
    }

    pub fn communication(&self) -> &CommunicationDialogState {
        &self.communication
    }

    pub fn communication_save(&self) -> &SaveState {
        &self.communication_save
    }

    pub fn saved_cards(&self) -> &SavedCardsState {
        &self.saved_cards
    }

    pub fn has_overlay(&self) -> bool {
        self.payment_form.is_visible()
            || self.communication.is_visible()
            || self.saved_cards.is_visible()
    }

    pub fn is_loading_overlay(&self) -> bool {
        self.loading.is_some()
    }

    /// Claims the popup slot for `overlay`. Refused while another popup is
    /// open or loading.
    fn begin_loading(&mut self, overlay: Overlay) -> bool {
        if self.has_overlay() || self.loading.is_some() {
            tracing::debug!(?overlay, pending = ?self.loading, "Popup already open or loading");
            return false;
        }
        self.loading = Some(overlay);
        true
    }

    /// Releases the popup slot. Returns `false` for a result nobody is
    /// waiting for, which the caller drops.
    fn finish_loading(&mut self, overlay: Overlay) -> bool {
        if self.loading != Some(overlay) {
            tracing::debug!(?overlay, pending = ?self.loading, "Dropped unexpected load result");
            return false;
        }
        self.loading = None;
        true
    }

    // -- Carousels ------------------------------------------------------------

    /// Starts the auto-advance timers. Their ticks come back as
    /// [`AppEvent::CarouselTick`].
    pub fn start_carousels(&mut self) {
        for id in [CarouselId::DealsBanner, CarouselId::TrendingHero] {
            let tx = self.events.clone();
            let runtime = self.runtime.clone();
            self.carousel_mut(id).start(&runtime, move |epoch| {
                let _ = tx.send(AppEvent::CarouselTick { id, epoch });
            });
        }
    }

    pub fn on_carousel_tick(&mut self, id: CarouselId, epoch: u64) {
        self.carousel_mut(id).on_timer_tick(epoch);
    }

    pub fn advance_focused(&mut self) {
        if let Some(id) = self.focus.carousel() {
            self.carousel_mut(id).advance();
        }
    }

    pub fn retreat_focused(&mut self) {
        if let Some(id) = self.focus.carousel() {
            self.carousel_mut(id).retreat();
        }
    }

    pub fn jump_focused(&mut self, index: usize) {
        let Some(id) = self.focus.carousel() else {
            return;
        };
        if let Err(err) = self.carousel_mut(id).jump_to(index) {
            self.status = Some(err.to_string());
        }
    }

    /// Enter on the focused section: follow the slide's call-to-action, or
    /// load more deals.
    pub fn activate(&mut self) {
        match self.focus.carousel() {
            Some(id) => {
                let slide = self.carousel(id).current_slide();
                let message = match slide.target {
                    Some(route) => format!("{} → {}", slide.cta_label, route.path()),
                    None => slide.cta_label.clone(),
                };
                tracing::debug!(slide = slide.id, "Call-to-action activated");
                self.status = Some(message);
            }
            None => self.load_more(),
        }
    }

    pub fn load_more(&mut self) {
        if !self.daily_deals.load_more() {
            self.status = Some("All deals are shown".to_string());
        }
    }

    /// Stops both carousel timers. Called when the storefront is dismissed.
    pub fn teardown(&mut self) {
        self.deals_banner.teardown();
        self.trending_hero.teardown();
    }

    /// Re-reads the config file and rebuilds the storefront sections.
    pub fn reload_config(&mut self) {
        let config = match self.config.reload() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "Config reload failed");
                self.status = Some(err.to_string());
                return;
            }
        };
        match build_storefront(&config) {
            Ok(storefront) => {
                self.teardown();
                self.deals_banner = storefront.deals_banner;
                self.trending_hero = storefront.trending_hero;
                self.daily_deals = storefront.daily_deals;
                self.start_carousels();
                self.status = Some("Configuration reloaded".to_string());
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    // -- Payment preference ---------------------------------------------------

    pub fn open_payment_form(&mut self) {
        self.load_payment_form(None);
    }

    fn load_payment_form(&mut self, editing_card: Option<SavedCard>) {
        if !self.begin_loading(Overlay::PaymentForm) {
            return;
        }
        let service = Arc::clone(&self.service);
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let loaded = async {
                Ok::<_, ServiceError>(PaymentFormData {
                    preference: service.payment_preference().await?,
                    cards: service.saved_cards().await?,
                    addresses: service.addresses().await?,
                    editing_card,
                })
            }
            .await;
            let _ = tx.send(AppEvent::PaymentFormLoaded(loaded));
        });
    }

    pub fn on_payment_form_loaded(&mut self, loaded: Result<PaymentFormData, ServiceError>) {
        if !self.finish_loading(Overlay::PaymentForm) {
            return;
        }
        match loaded {
            Ok(data) => {
                dispatch_mvi!(self, payment_save, SaveReducer, SaveIntent::Dismiss);
                dispatch_mvi!(
                    self,
                    payment_form,
                    PaymentFormReducer,
                    PaymentFormIntent::Open {
                        preference: data.preference,
                        cards: data.cards,
                        addresses: data.addresses,
                        editing_card: data.editing_card,
                    }
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load payment preference");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn dispatch_payment_form(&mut self, intent: PaymentFormIntent) {
        if matches!(intent, PaymentFormIntent::Close) {
            dispatch_mvi!(self, payment_save, SaveReducer, SaveIntent::Dismiss);
        }
        dispatch_mvi!(self, payment_form, PaymentFormReducer, intent);
    }

    pub fn submit_payment(&mut self) {
        let Some(form) = self.payment_form.form() else {
            return;
        };
        if self.payment_save.is_busy() {
            return;
        }
        let preference = form.submission();
        dispatch_mvi!(self, payment_save, SaveReducer, SaveIntent::Submit);
        self.spawn_payment_save(preference);
    }

    pub fn retry_payment(&mut self) {
        if !self.payment_save.can_retry() {
            return;
        }
        let Some(preference) = self.pending_payment.clone() else {
            return;
        };
        dispatch_mvi!(self, payment_save, SaveReducer, SaveIntent::Retry);
        self.spawn_payment_save(preference);
    }

    fn spawn_payment_save(&mut self, preference: PaymentPreference) {
        tracing::debug!(
            attempt = ?self.payment_save.attempt(),
            payload = %preference.to_payload(),
            "Saving payment preference"
        );
        self.pending_payment = Some(preference.clone());
        let service = Arc::clone(&self.service);
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let result = save_with_timeout(service, preference, SAVE_TIMEOUT).await;
            let _ = tx.send(AppEvent::PaymentSaved(result));
        });
    }

    pub fn on_payment_saved(&mut self, result: Result<PaymentPreference, ServiceError>) {
        match result {
            Ok(_) => {
                dispatch_mvi!(self, payment_save, SaveReducer, SaveIntent::Succeeded);
                if self.payment_save == SaveState::Saved {
                    self.pending_payment = None;
                    dispatch_mvi!(self, payment_form, PaymentFormReducer, PaymentFormIntent::Close);
                    self.status = Some("Payment preference saved".to_string());
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, retryable = err.is_retryable(), "Payment preference save failed");
                dispatch_mvi!(
                    self,
                    payment_save,
                    SaveReducer,
                    SaveIntent::Failed {
                        message: err.to_string(),
                        retryable: err.is_retryable(),
                    }
                );
            }
        }
    }

    // -- Communication preferences --------------------------------------------

    pub fn open_communication(&mut self) {
        if !self.begin_loading(Overlay::Communication) {
            return;
        }
        let service = Arc::clone(&self.service);
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let loaded = service.communication_preferences().await;
            let _ = tx.send(AppEvent::CommunicationLoaded(loaded));
        });
    }

    pub fn on_communication_loaded(
        &mut self,
        loaded: Result<Vec<CommunicationPreference>, ServiceError>,
    ) {
        if !self.finish_loading(Overlay::Communication) {
            return;
        }
        match loaded {
            Ok(fields) => {
                dispatch_mvi!(self, communication_save, SaveReducer, SaveIntent::Dismiss);
                dispatch_mvi!(
                    self,
                    communication,
                    CommunicationReducer,
                    CommunicationIntent::Load { fields }
                );
            }
            Err(err) => self.status = Some(err.to_string()),
        }
    }

    pub fn dispatch_communication(&mut self, intent: CommunicationIntent) {
        dispatch_mvi!(self, communication, CommunicationReducer, intent);
    }

    /// Saves the dialog's toggles; a clean dialog just closes.
    pub fn save_communication(&mut self) {
        if !self.communication.is_visible() || self.communication_save.is_busy() {
            return;
        }
        if !self.communication.is_dirty() {
            self.dispatch_communication(CommunicationIntent::Close);
            return;
        }
        let fields = self.communication.fields().to_vec();
        dispatch_mvi!(self, communication_save, SaveReducer, SaveIntent::Submit);
        let service = Arc::clone(&self.service);
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let result = service.save_communication_preferences(fields).await;
            let _ = tx.send(AppEvent::CommunicationSaved(result));
        });
    }

    pub fn on_communication_saved(&mut self, result: Result<(), ServiceError>) {
        match result {
            Ok(()) => {
                dispatch_mvi!(self, communication_save, SaveReducer, SaveIntent::Succeeded);
                self.dispatch_communication(CommunicationIntent::Close);
                self.status = Some("Communication preferences saved".to_string());
            }
            Err(err) => {
                dispatch_mvi!(
                    self,
                    communication_save,
                    SaveReducer,
                    SaveIntent::Failed {
                        message: err.to_string(),
                        retryable: err.is_retryable(),
                    }
                );
            }
        }
    }

    // -- Saved cards ----------------------------------------------------------

    pub fn open_saved_cards(&mut self) {
        if !self.begin_loading(Overlay::SavedCards) {
            return;
        }
        let service = Arc::clone(&self.service);
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let loaded = async {
                let preference = service.payment_preference().await?;
                Ok::<_, ServiceError>(SavedCardsData {
                    cards: service.saved_cards().await?,
                    preferred_token_id: preference.and_then(|p| p.preferred_card_token_id),
                })
            }
            .await;
            let _ = tx.send(AppEvent::SavedCardsLoaded(loaded));
        });
    }

    pub fn on_saved_cards_loaded(&mut self, loaded: Result<SavedCardsData, ServiceError>) {
        if !self.finish_loading(Overlay::SavedCards) {
            return;
        }
        match loaded {
            Ok(data) => dispatch_mvi!(
                self,
                saved_cards,
                SavedCardsReducer,
                SavedCardsIntent::Load {
                    cards: data.cards,
                    preferred_token_id: data.preferred_token_id,
                }
            ),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load saved cards");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn dispatch_saved_cards(&mut self, intent: SavedCardsIntent) {
        dispatch_mvi!(self, saved_cards, SavedCardsReducer, intent);
    }

    /// Leaves the list and opens the payment form with the selected card as
    /// the preferred one.
    pub fn edit_selected_card(&mut self) {
        if self.saved_cards.removing().is_some() {
            return;
        }
        let Some(card) = self.saved_cards.selected_card().cloned() else {
            return;
        };
        self.dispatch_saved_cards(SavedCardsIntent::Close);
        self.load_payment_form(Some(card));
    }

    pub fn remove_selected_card(&mut self) {
        if self.saved_cards.removing().is_some() {
            return;
        }
        let Some(token_id) = self.saved_cards.selected_card().map(|c| c.token_id.clone()) else {
            return;
        };
        self.dispatch_saved_cards(SavedCardsIntent::RemoveStarted {
            token_id: token_id.clone(),
        });
        let service = Arc::clone(&self.service);
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let result = service.remove_saved_card(&token_id).await;
            let _ = tx.send(AppEvent::CardRemoved { token_id, result });
        });
    }

    pub fn on_card_removed(&mut self, token_id: String, result: Result<(), ServiceError>) {
        match result {
            Ok(()) => {
                self.dispatch_saved_cards(SavedCardsIntent::Removed { token_id });
                self.status = Some("Card removed".to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, token_id = %token_id, "Failed to remove saved card");
                self.dispatch_saved_cards(SavedCardsIntent::RemoveFailed);
                self.status = Some(err.to_string());
            }
        }
    }
}
