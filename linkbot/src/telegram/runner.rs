//! Dispatcher runner: wires the teloxide dispatcher to the command processor
//! and runs the rotation loop alongside it.

use std::sync::Arc;

use anyhow::Result;
use teloxide::{
    dispatching::UpdateHandler,
    dptree,
    prelude::*,
    types::{CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup},
};
use tokio::sync::broadcast;
use tracing::{error, info, warn};

use linkbot_core::{init_tracing, ReplyAction};
use storage::StateStore;

use crate::config::BotConfig;
use crate::rotation::run_rotation;
use crate::service::BotService;
use crate::telegram::commands::parse_command;
use crate::telegram::messenger::TelegramMessenger;
use crate::telegram::render::{latest_link_text, render};

const GET_LINK_CALLBACK: &str = "get_link";

fn link_button_markup() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
        "📥 Get Latest Link",
        GET_LINK_CALLBACK.to_string(),
    )]])
}

fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(
            |bot: Bot, service: Arc<BotService>, msg: Message| async move {
                handle_message(&bot, &service, &msg).await;
                Ok(())
            },
        ))
        .branch(Update::filter_callback_query().endpoint(
            |bot: Bot, service: Arc<BotService>, q: CallbackQuery| async move {
                handle_callback(&bot, &service, q).await;
                Ok(())
            },
        ))
}

async fn handle_message(bot: &Bot, service: &BotService, msg: &Message) {
    let Some(text) = msg.text() else { return };
    let Some(from) = msg.from.as_ref() else { return };
    let Some((command, args)) = parse_command(text) else {
        return;
    };
    let caller_id = from.id.0.to_string();
    info!(
        user_id = %caller_id,
        chat_id = msg.chat.id.0,
        command = ?command,
        "Received command"
    );

    let messenger = TelegramMessenger::new(bot.clone());
    let result = service.dispatch(&caller_id, command, &args, &messenger).await;
    let reply = render(&result);

    let request = bot.send_message(msg.chat.id, reply.text);
    let sent = match reply.action {
        ReplyAction::LinkButton => request.reply_markup(link_button_markup()).await,
        ReplyAction::None => request.await,
    };
    if let Err(e) = sent {
        error!(error = %e, user_id = %caller_id, "Failed to send reply");
    }
}

async fn handle_callback(bot: &Bot, service: &BotService, q: CallbackQuery) {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }
    if q.data.as_deref() != Some(GET_LINK_CALLBACK) {
        return;
    }
    let link = service.current_link().await;
    let text = latest_link_text(link.as_deref());
    if let Some(message) = q.message.as_ref() {
        if let Err(e) = bot
            .edit_message_text(message.chat().id, message.id(), text)
            .await
        {
            error!(error = %e, "Failed to edit message with current link");
        }
    }
}

/// Main entry: init logging, load state, spawn the rotation loop, and run the
/// dispatcher until ctrl-c. The rotation task is joined before exit so a
/// mid-tick persist finishes.
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    let store = StateStore::new(&config.data_file);
    let service = Arc::new(BotService::new(store));
    let bot = Bot::new(config.bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Starting bot");
        }
    }

    let (shutdown_tx, _shutdown_rx) = broadcast::channel::<()>(1);
    let rotation = tokio::spawn(run_rotation(service.clone(), shutdown_tx.subscribe()));

    info!("Bot is running");
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![service])
        .default_handler(|upd| async move {
            let _ = upd;
        })
        .error_handler(LoggingErrorHandler::with_custom_text("Dispatcher error"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    let _ = shutdown_tx.send(());
    let _ = rotation.await;
    info!("Shutdown complete");
    Ok(())
}
