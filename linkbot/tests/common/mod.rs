pub mod recording_messenger;
