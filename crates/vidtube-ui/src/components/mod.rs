pub(crate) mod auth_layout;
pub(crate) mod avatar;
pub(crate) mod button;
pub(crate) mod composer;
pub(crate) mod container;
pub(crate) mod description;
pub(crate) mod image_upload;
pub(crate) mod infinite_scroll;
pub(crate) mod like;
pub(crate) mod personal_info;
pub(crate) mod playlist_card;
pub(crate) mod toast;
pub(crate) mod video_card;
