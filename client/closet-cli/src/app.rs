use crate::{
    closet_commands::ClosetCommands,
    commands::Commands,
    error::{CliError, CliResult},
    event_commands::EventCommands,
    profile_commands::ProfileCommands,
    recommendation_commands::RecommendationCommands,
    terminal::TerminalNavigator,
};

use closet_client::api::models::{
    ClosetItemUpdate, EventUpdate, ImageUpload, NewClosetItem, NewEvent, ProfileUpdate,
};
use closet_client::password::{self, StrengthLevel};
use closet_client::screens::{
    ClosetScreen, DashboardScreen, EventsScreen, ForgotPasswordScreen, LoginScreen, ProfileScreen,
    RecommendationsScreen, ResetPasswordScreen, SignupForm, SignupScreen, VerifyOtpScreen,
};
use closet_client::{
    AnimationSignal, ApiClient, Bootstrapper, NoopHostShell, RequestHelper, SessionContext,
    SessionStore, StartupTimings, ViewLifecycle,
};
use closet_config::Config;

use std::path::Path;
use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// Everything a command needs: the configured client, the persisted
/// session, and a navigator that remembers where the user was sent.
pub struct App {
    config: Config,
    helper: RequestHelper,
    navigator: Arc<TerminalNavigator>,
}

impl App {
    pub fn new(config: Config, store: Arc<dyn SessionStore>) -> CliResult<Self> {
        let api = ApiClient::new(&config.api)?;
        let navigator = Arc::new(TerminalNavigator::new());
        let helper = RequestHelper::new(api, SessionContext::new(store), navigator.clone());

        Ok(Self {
            config,
            helper,
            navigator,
        })
    }

    pub fn navigator(&self) -> &TerminalNavigator {
        &self.navigator
    }

    pub(crate) async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Start { min_duration_ms } => self.start(min_duration_ms).await,
            Commands::Login { email, password } => {
                let mut screen = LoginScreen::new(self.helper.clone());
                screen.email = email;
                screen.password = password;
                if !screen.submit().await {
                    return Err(CliError::screen(screen.error.as_deref()));
                }
                Ok(self.outcome(None))
            }
            Commands::Signup {
                full_name,
                email,
                password,
                confirm_password,
                age,
                gender,
                location,
                accept_terms,
            } => {
                let mut screen = SignupScreen::new(self.helper.clone());
                screen.form = SignupForm {
                    full_name,
                    email,
                    password,
                    confirm_password,
                    age,
                    gender,
                    location,
                    terms_accepted: accept_terms,
                };
                if !screen.submit().await {
                    return Err(CliError::screen(screen.error.as_deref()));
                }
                Ok(self.outcome(None))
            }
            Commands::VerifyOtp {
                user_id,
                purpose,
                code,
            } => {
                let mut screen =
                    VerifyOtpScreen::new(self.helper.clone(), Some(user_id), Some(purpose));
                if !screen.mount() {
                    return Err(CliError::screen(screen.error.as_deref()));
                }
                screen.code = code;
                if !screen.submit().await {
                    return Err(CliError::screen(screen.error.as_deref()));
                }
                Ok(self.outcome(screen.message.as_deref()))
            }
            Commands::ForgotPassword { email } => {
                let mut screen = ForgotPasswordScreen::new(self.helper.clone());
                screen.email = email;
                if !screen.submit().await {
                    return Err(CliError::screen(screen.error.as_deref()));
                }
                Ok(self.outcome(screen.message.as_deref()))
            }
            Commands::ResetPassword {
                user_id,
                password,
                confirm_password,
            } => {
                let mut screen = ResetPasswordScreen::new(self.helper.clone(), Some(user_id));
                if !screen.mount() {
                    return Err(CliError::screen(screen.error.as_deref()));
                }
                screen.set_new_password(password);
                screen.confirm_password = confirm_password;
                if !screen.submit().await {
                    return Err(CliError::screen(screen.error.as_deref()));
                }
                Ok(self.outcome(screen.message.as_deref()))
            }
            Commands::Logout => {
                DashboardScreen::new(self.helper.clone()).logout().await;
                Ok(self.outcome(None))
            }
            Commands::Profile { action } => self.profile(action).await,
            Commands::Closet { action } => self.closet(action).await,
            Commands::Events { action } => self.events(action).await,
            Commands::Recommendations { action } => self.recommendations(action).await,
            Commands::Strength { password } => Ok(strength_report(&password)),
        }
    }

    async fn start(&self, min_duration_ms: Option<u64>) -> CliResult<Value> {
        let mut startup = self.config.startup.clone();
        if let Some(ms) = min_duration_ms {
            startup.min_duration_ms = ms;
            startup.validate()?;
        }
        let timings = StartupTimings::from(&startup);

        let bootstrapper = Bootstrapper::new(
            self.helper.session().clone(),
            self.navigator.clone(),
            Arc::new(NoopHostShell),
            timings,
        );

        let route = bootstrapper
            .run(AnimationSignal::finished(), &ViewLifecycle::new())
            .await;
        info!("Startup finished");

        Ok(json!({ "route": route.map(|r| r.to_string()) }))
    }

    async fn profile(&self, action: ProfileCommands) -> CliResult<Value> {
        let mut screen = ProfileScreen::new(self.helper.clone());

        match action {
            ProfileCommands::Show => {
                if !screen.load().await {
                    return Err(CliError::screen(screen.error.as_deref()));
                }
            }
            ProfileCommands::Update {
                full_name,
                age,
                gender,
                location,
                picture,
            } => {
                let profile_picture = match picture {
                    Some(path) => Some(read_image(&path).await?),
                    None => None,
                };
                let update = ProfileUpdate {
                    full_name,
                    age,
                    gender,
                    location,
                    profile_picture,
                };
                self.helper.refresh_csrf_token().await;
                if !screen.save(update).await {
                    return Err(CliError::screen(screen.error.as_deref()));
                }
            }
        }

        Ok(serde_json::to_value(&screen.user)?)
    }

    async fn closet(&self, action: ClosetCommands) -> CliResult<Value> {
        let mut screen = ClosetScreen::new(self.helper.clone());

        let ok = match action {
            ClosetCommands::List => screen.mount().await,
            ClosetCommands::Add {
                name,
                category,
                color,
                season,
                image,
            } => {
                let image = match image {
                    Some(path) => Some(read_image(&path).await?),
                    None => None,
                };
                self.helper.refresh_csrf_token().await;
                screen
                    .add_item(NewClosetItem {
                        name,
                        category,
                        color,
                        season,
                        image,
                    })
                    .await
            }
            ClosetCommands::Update {
                id,
                name,
                category,
                color,
                season,
            } => {
                self.helper.refresh_csrf_token().await;
                screen
                    .update_item(
                        id,
                        ClosetItemUpdate {
                            name,
                            category,
                            color,
                            season,
                        },
                    )
                    .await
            }
            ClosetCommands::Delete { id } => {
                self.helper.refresh_csrf_token().await;
                screen.delete_item(id).await
            }
        };

        if !ok {
            return Err(CliError::screen(screen.error()));
        }
        Ok(serde_json::to_value(screen.items())?)
    }

    async fn events(&self, action: EventCommands) -> CliResult<Value> {
        let mut screen = EventsScreen::new(self.helper.clone());

        let ok = match action {
            EventCommands::List => screen.mount().await,
            EventCommands::Add {
                title,
                date,
                location,
                dress_code,
                description,
            } => {
                self.helper.refresh_csrf_token().await;
                screen
                    .add_event(NewEvent {
                        title,
                        date,
                        location,
                        dress_code,
                        description,
                    })
                    .await
            }
            EventCommands::Update {
                id,
                title,
                date,
                location,
                dress_code,
                description,
            } => {
                self.helper.refresh_csrf_token().await;
                screen
                    .update_event(
                        id,
                        EventUpdate {
                            title,
                            date,
                            location,
                            dress_code,
                            description,
                        },
                    )
                    .await
            }
            EventCommands::Delete { id } => {
                self.helper.refresh_csrf_token().await;
                screen.delete_event(id).await
            }
        };

        if !ok {
            return Err(CliError::screen(screen.error()));
        }
        Ok(serde_json::to_value(screen.events())?)
    }

    async fn recommendations(&self, action: RecommendationCommands) -> CliResult<Value> {
        let mut screen = RecommendationsScreen::new(self.helper.clone());

        match action {
            RecommendationCommands::List { event_id } => {
                if !screen.refresh().await {
                    return Err(CliError::screen(screen.error()));
                }
                match event_id {
                    Some(id) => Ok(serde_json::to_value(screen.for_event(id))?),
                    None => Ok(serde_json::to_value(screen.recommendations())?),
                }
            }
        }
    }

    /// Command result for flows whose product is a navigation.
    fn outcome(&self, message: Option<&str>) -> Value {
        json!({
            "route": self.navigator.last_route().map(|r| r.to_string()),
            "message": message,
        })
    }
}

fn strength_report(password: &str) -> Value {
    let score = password::score(password);
    let level = StrengthLevel::from_score(score);
    json!({
        "score": score,
        "label": level.label(),
        "acceptable": level.is_acceptable(),
    })
}

async fn read_image(path: &Path) -> CliResult<ImageUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| CliError::io(path.to_path_buf(), e))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("upload"));
    Ok(ImageUpload::from_file_name(file_name, bytes))
}
