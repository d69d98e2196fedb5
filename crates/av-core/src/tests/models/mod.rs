mod identity;
mod identity_patch;
