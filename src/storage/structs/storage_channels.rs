pub struct StorageChannels;
