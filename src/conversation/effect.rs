//! Effects produced by state transitions and the texts the bot replies with

use super::event::PhotoVariant;

/// Fixed bot replies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Greeting,
    NameSaved,
    PhotoSaved,
    PhotoSaveFailed,
    Cancelled,
    NothingToCancel,
    AskNameAsText,
    AskPhotoNotFile,
    Intro,
}

impl Reply {
    pub fn text(self) -> &'static str {
        match self {
            Reply::Greeting => "Привет!👋 \nНапиши ФИО ребенка, который участвует в конкурсе! 🏆",
            Reply::NameSaved => {
                "Спасибо, я записал ФИО! ✍️ \nТеперь отправь фото 📹. \nЕсли передумаешь, отправь /cancel."
            }
            Reply::PhotoSaved => "👏 Отлично! 💾 Фото успешно сохранено!",
            Reply::PhotoSaveFailed => {
                "⚠️ Не получилось сохранить фото. Попробуй отправить его ещё раз. \nЕсли передумал, отправь /cancel."
            }
            Reply::Cancelled => "Действие отменено ❌. Вы можете начать заново, отправив /start.",
            Reply::NothingToCancel => "Нет активных действий для отмены. ❌",
            Reply::AskNameAsText => "⚠️ Пожалуйста, отправьте ФИО. ⚠️ \nЕсли передумали, отправьте /cancel.",
            Reply::AskPhotoNotFile => {
                "⚠️ Пожалуйста, отправьте фото (не файлом). ⚠️ \nЕсли передумали, отправьте /cancel."
            }
            Reply::Intro => {
                "Я самый крутой в мире бот! 😎\n\
                 Меня создали для резидентов школы KIBERone.\n\
                 Я помогаю регистрировать участников конкурса! Давай присоединяйся! 🏆\n\
                 Для участия/регистрации в конкурсе используйте команду: /start"
            }
        }
    }
}

/// Outbound message requested by a transition, executed by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the configured greeting sticker, followed by the greeting pause
    GreetingSticker,
    /// Send a text reply
    Reply(Reply),
}

/// Download the photo and store it under the participant's name
///
/// Runs before any message of the same transition; if it fails the
/// transition is not committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSave {
    pub variant: PhotoVariant,
    pub name: String,
}
