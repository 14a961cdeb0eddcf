use dioxus::prelude::*;

/// How long a toast stays up before dismissing itself
const TOAST_MILLIS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert alert-success",
            ToastKind::Error => "alert alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast { id, kind, message });

        let mut toaster = *self;
        spawn(async move {
            let script = format!(
                "await new Promise((resolve) => setTimeout(resolve, {})); return null;",
                TOAST_MILLIS
            );
            let _ = document::eval(&script).await;
            toaster.dismiss(id);
        });
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
