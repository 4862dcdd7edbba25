//! Fixed texts used by the AI counselor.

/// System instruction prepended to every AI completion request.
pub const COUNSELOR_SYSTEM_PROMPT: &str = "You are a compassionate AI counselor specializing in \
youth mental health. Provide supportive, empathetic responses. Always encourage professional \
help for serious issues. Respond in the language the user writes in, defaulting to Indonesian \
(Bahasa Indonesia).";

/// Assistant reply appended when the text-generation call fails.
pub const AI_ERROR_FALLBACK: &str = "Maaf, terjadi kesalahan. Silakan coba lagi atau hubungi \
konselor profesional jika Anda memerlukan bantuan segera.";

/// Assistant reply appended when the service answers with no text.
pub const AI_EMPTY_REPLY_FALLBACK: &str =
    "Maaf, saya tidak dapat memproses pesan Anda saat ini. Silakan coba lagi.";
