// Domain layer: conversion model and ports. Nothing here touches the filesystem.

pub mod dialect;
pub mod model;
pub mod ports;
